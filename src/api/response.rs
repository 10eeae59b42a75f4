//! Response types for the payroll engine API.
//!
//! This module defines the success payloads for each endpoint plus the
//! error response structures and error-to-status mapping.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::{CalculatedPayrollRecord, ClientBreakdownEntry, Month, MonthlyFinancials};
use crate::store::CurrencyCode;

/// Response body for the `/calculate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlySummaryResponse {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The month the summary covers.
    pub month: Month,
    /// Human-readable month label, e.g. "February 2024".
    pub month_label: String,
    /// The company billing currency.
    pub currency: CurrencyCode,
    /// Monthly totals and the calculated records behind them.
    pub financials: MonthlyFinancials,
    /// Per-client income/expense/profit rollup.
    pub client_breakdown: Vec<ClientBreakdownEntry>,
}

/// Response body for the `/invoice` endpoint.
///
/// Numeric facts only — rendering an actual document is the consumer's job.
/// VAT is computed here at the document boundary; the calculation core has
/// no notion of tax.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceResponse {
    /// The derived invoice number, e.g. "INV-0004".
    pub invoice_number: String,
    /// When the invoice facts were produced.
    pub timestamp: DateTime<Utc>,
    /// The month the invoice covers.
    pub month: Month,
    /// Human-readable month label for the document title.
    pub month_label: String,
    /// The invoiced client.
    pub client_id: String,
    /// The invoiced client's display name.
    pub client_name: String,
    /// The invoiced client's tax registration number, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_trn: Option<String>,
    /// The company billing currency.
    pub currency: CurrencyCode,
    /// Sum of billed amounts across the invoice lines.
    pub subtotal: Decimal,
    /// VAT rate in percent applied to the subtotal.
    pub vat_rate: Decimal,
    /// `subtotal * vat_rate / 100`.
    pub vat_amount: Decimal,
    /// `subtotal + vat_amount`.
    pub total: Decimal,
    /// The calculated records the invoice lines were drawn from.
    pub records: Vec<CalculatedPayrollRecord>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates an invalid month error response.
    pub fn invalid_month(input: &str) -> Self {
        Self::with_details(
            "INVALID_MONTH",
            format!("Invalid month identifier: {}", input),
            "Months must use the YYYY-MM form, e.g. 2024-02".to_string(),
        )
    }

    /// Creates a client not found error response.
    pub fn client_not_found(id: &str) -> Self {
        Self::with_details(
            "CLIENT_NOT_FOUND",
            format!("Client not found: {}", id),
            format!("No client with id '{}' exists on the roster", id),
        )
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::StoreNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "STORE_ERROR",
                    "Store error",
                    format!("Store file not found: {}", path),
                ),
            },
            EngineError::StoreParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "STORE_ERROR",
                    "Store parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidMonth { input } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::invalid_month(&input),
            },
            EngineError::InvalidDateRange {
                record_id,
                start,
                end,
            } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::validation_error(format!(
                    "Record '{}' has an invalid date range: {} is after {}",
                    record_id, start, end
                )),
            },
            EngineError::ExportFailed { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::new("EXPORT_ERROR", message),
            },
        }
    }
}
