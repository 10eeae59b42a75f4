//! Request types for the payroll engine API.
//!
//! This module defines the JSON request structures for the `/calculate`,
//! `/export` and `/invoice` endpoints.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::PayrollRecord;

/// Request body for the `/calculate` and `/export` endpoints.
///
/// Carries the target month and the payroll records to evaluate; settings
/// and rosters come from the loaded store. The month is accepted as a raw
/// string so the handler can reject bad identifiers with a dedicated error
/// code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The month to evaluate, as `"YYYY-MM"`.
    pub month: String,
    /// The payroll records to evaluate.
    pub records: Vec<PayrollRecordRequest>,
}

/// Request body for the `/invoice` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceRequest {
    /// The month the invoice covers, as `"YYYY-MM"`.
    pub month: String,
    /// The client company being invoiced.
    pub client_id: String,
    /// The payroll records to draw invoice lines from.
    pub records: Vec<PayrollRecordRequest>,
    /// Running invoice count used to derive the next invoice number.
    #[serde(default)]
    pub invoice_count: u32,
}

/// Payroll record information in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollRecordRequest {
    /// Unique identifier for the record.
    pub id: String,
    /// The placed nurse (roster reference).
    pub nurse_id: String,
    /// The client company billed for the placement (roster reference).
    pub client_id: String,
    /// Monthly amount billed to the client for a full month.
    pub contract_amount: Decimal,
    /// Monthly nurse salary for a full month.
    pub salary: Decimal,
    /// Monthly transportation allowance for a full month.
    #[serde(default)]
    pub transportation: Decimal,
    /// Extra days worked beyond the base schedule.
    #[serde(default)]
    pub overtime_days: Decimal,
    /// Deductions applied to the nurse's pay.
    #[serde(default)]
    pub fines: Decimal,
    /// First day of the assignment (inclusive).
    pub start_date: NaiveDate,
    /// Last day of the assignment (inclusive).
    pub end_date: NaiveDate,
    /// Bill and pay the record as a full month regardless of dates.
    #[serde(default)]
    pub full_month: bool,
    /// When the record was created. Defaults to the request time.
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl From<PayrollRecordRequest> for PayrollRecord {
    fn from(req: PayrollRecordRequest) -> Self {
        PayrollRecord {
            id: req.id,
            nurse_id: req.nurse_id,
            client_id: req.client_id,
            contract_amount: req.contract_amount,
            salary: req.salary,
            transportation: req.transportation,
            overtime_days: req.overtime_days,
            fines: req.fines,
            start_date: req.start_date,
            end_date: req.end_date,
            full_month: req.full_month,
            created_at: req.created_at,
        }
    }
}
