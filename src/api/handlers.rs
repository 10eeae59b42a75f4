//! HTTP request handlers for the payroll engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    calculate_client_breakdown, calculate_monthly_financials, calculate_record_financials,
    next_invoice_number, record_matches_month,
};
use crate::export::payroll_csv;
use crate::models::{Month, PayrollRecord};

use super::request::{CalculationRequest, InvoiceRequest, PayrollRecordRequest};
use super::response::{ApiError, ApiErrorResponse, InvoiceResponse, MonthlySummaryResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/export", post(export_handler))
        .route("/invoice", post(invoice_handler))
        .with_state(state)
}

/// Maps a JSON extraction rejection to a typed API error.
fn rejection_to_error(correlation_id: Uuid, rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        ),
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}

fn bad_request(error: ApiError) -> axum::response::Response {
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

/// Converts request records to domain records, rejecting malformed date
/// ranges up front and dropping records that do not touch the month.
fn prepare_records(
    correlation_id: Uuid,
    requests: Vec<PayrollRecordRequest>,
    month: Month,
) -> Result<Vec<PayrollRecord>, ApiErrorResponse> {
    let mut records = Vec::with_capacity(requests.len());
    for request in requests {
        let record: PayrollRecord = request.into();
        if let Err(err) = record.validate_dates() {
            warn!(
                correlation_id = %correlation_id,
                record_id = %record.id,
                "Rejected record with invalid date range"
            );
            return Err(err.into());
        }
        if record_matches_month(&record, month) {
            records.push(record);
        }
    }
    Ok(records)
}

/// Handler for the POST /calculate endpoint.
///
/// Evaluates the supplied records against the requested month and returns
/// the monthly financials together with the per-client breakdown.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_request(rejection_to_error(correlation_id, rejection)),
    };

    let month: Month = match request.month.parse() {
        Ok(month) => month,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                input = %request.month,
                "Invalid month identifier"
            );
            let api_error: ApiErrorResponse = err.into();
            return api_error.into_response();
        }
    };

    let records = match prepare_records(correlation_id, request.records, month) {
        Ok(records) => records,
        Err(api_error) => return api_error.into_response(),
    };

    let store = state.store();
    let financials = calculate_monthly_financials(&records, store.staff(), month);
    let client_breakdown = calculate_client_breakdown(&financials.records, store.clients());

    info!(
        correlation_id = %correlation_id,
        month = %month,
        records_count = financials.records.len(),
        billed_income = %financials.billed_income,
        net_profit = %financials.net_profit,
        "Calculation completed successfully"
    );

    let response = MonthlySummaryResponse {
        calculation_id: correlation_id,
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        month,
        month_label: month.label(),
        currency: store.settings().currency,
        financials,
        client_breakdown,
    };

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(response),
    )
        .into_response()
}

/// Handler for the POST /export endpoint.
///
/// Evaluates the supplied records and returns the payroll table as a CSV
/// attachment.
async fn export_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing export request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_request(rejection_to_error(correlation_id, rejection)),
    };

    let month: Month = match request.month.parse() {
        Ok(month) => month,
        Err(err) => {
            let api_error: ApiErrorResponse = err.into();
            return api_error.into_response();
        }
    };

    let records = match prepare_records(correlation_id, request.records, month) {
        Ok(records) => records,
        Err(api_error) => return api_error.into_response(),
    };

    let store = state.store();
    let calculated: Vec<_> = records
        .iter()
        .map(|record| calculate_record_financials(record, month))
        .collect();

    match payroll_csv(&calculated, store.nurses(), store.clients(), month) {
        Ok(csv) => {
            info!(
                correlation_id = %correlation_id,
                month = %month,
                rows = calculated.len(),
                "Export completed successfully"
            );
            let filename = format!("payroll-{}-{}.csv", month, store.settings().currency);
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
                    (
                        header::CONTENT_DISPOSITION,
                        format!("attachment; filename=\"{}\"", filename),
                    ),
                ],
                csv,
            )
                .into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Export failed");
            let api_error: ApiErrorResponse = err.into();
            api_error.into_response()
        }
    }
}

/// Handler for the POST /invoice endpoint.
///
/// Produces the numeric facts of an invoice for one client and month:
/// billed lines, subtotal, VAT and total, plus the derived invoice number.
async fn invoice_handler(
    State(state): State<AppState>,
    payload: Result<Json<InvoiceRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing invoice request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_request(rejection_to_error(correlation_id, rejection)),
    };

    let month: Month = match request.month.parse() {
        Ok(month) => month,
        Err(err) => {
            let api_error: ApiErrorResponse = err.into();
            return api_error.into_response();
        }
    };

    let store = state.store();
    let Some(client) = store.get_client(&request.client_id) else {
        warn!(
            correlation_id = %correlation_id,
            client_id = %request.client_id,
            "Client not found"
        );
        return bad_request(ApiError::client_not_found(&request.client_id));
    };

    let records = match prepare_records(correlation_id, request.records, month) {
        Ok(records) => records,
        Err(api_error) => return api_error.into_response(),
    };

    let calculated: Vec<_> = records
        .iter()
        .filter(|record| record.client_id == client.id)
        .map(|record| calculate_record_financials(record, month))
        .collect();

    let settings = store.settings();
    let subtotal: Decimal = calculated.iter().map(|calc| calc.billed_amount).sum();
    let vat_amount = subtotal * settings.vat_rate / Decimal::from(100);
    let total = subtotal + vat_amount;

    info!(
        correlation_id = %correlation_id,
        month = %month,
        client_id = %client.id,
        lines = calculated.len(),
        subtotal = %subtotal,
        "Invoice facts produced"
    );

    let response = InvoiceResponse {
        invoice_number: next_invoice_number(request.invoice_count, &settings.invoice_prefix),
        timestamp: Utc::now(),
        month,
        month_label: month.label(),
        client_id: client.id.clone(),
        client_name: client.name.clone(),
        client_trn: client.trn.clone(),
        currency: settings.currency,
        subtotal,
        vat_rate: settings.vat_rate,
        vat_amount,
        total,
        records: calculated,
    };

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(response),
    )
        .into_response()
}
