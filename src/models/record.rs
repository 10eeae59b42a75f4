//! Payroll record model.
//!
//! A payroll record captures one nurse placement with one client company:
//! the monthly contract and pay rates, the assignment date range, and the
//! adjustments (overtime days, fines) applied for the month.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A nurse placement assignment and its commercial terms.
///
/// `nurse_id` and `client_id` reference the rosters held by the store; the
/// engine reads them for attribution only and never dereferences them during
/// calculation. `start_date <= end_date` is expected to be enforced when a
/// record is created; [`PayrollRecord::validate_dates`] is the entry-time
/// check for that invariant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollRecord {
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
    pub transportation: Decimal,
    /// Extra days worked beyond the base schedule. Fractional days allowed.
    pub overtime_days: Decimal,
    /// Deductions applied to the nurse's pay for the month.
    pub fines: Decimal,
    /// First day of the assignment (inclusive).
    pub start_date: NaiveDate,
    /// Last day of the assignment (inclusive).
    pub end_date: NaiveDate,
    /// When true, the record is paid and billed as a full month regardless
    /// of the assignment dates.
    pub full_month: bool,
    /// When the record was created. Informational only.
    pub created_at: DateTime<Utc>,
}

impl PayrollRecord {
    /// Checks that the assignment date range is well-formed.
    ///
    /// Returns [`EngineError::InvalidDateRange`] when `start_date` is after
    /// `end_date`. Callers validate records at entry time with this method;
    /// a malformed record that still reaches the calculator degrades to a
    /// zero-contribution result instead of failing.
    pub fn validate_dates(&self) -> EngineResult<()> {
        if self.start_date > self.end_date {
            return Err(EngineError::InvalidDateRange {
                record_id: self.id.clone(),
                start: self.start_date,
                end: self.end_date,
            });
        }
        Ok(())
    }
}
