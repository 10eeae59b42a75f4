//! Calculated payroll record model.
//!
//! A [`CalculatedPayrollRecord`] is the source record extended with every
//! derived financial figure for one target month. It is a pure projection:
//! never stored, recomputed on demand whenever the source record or the
//! target month changes.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Month, PayrollRecord};

/// A payroll record fully evaluated against one calendar month.
///
/// Invariants maintained by the calculator:
/// - `payable_amount = base_salary_amount + transportation_amount + overtime_amount - fines`
/// - `profit = billed_amount - payable_amount`
///
/// `days_worked` holds the effective days the money math was based on: the
/// month's total working days when the record is flagged full-month, the
/// clamped working-day count otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatedPayrollRecord {
    /// The source record the figures were derived from.
    #[serde(flatten)]
    pub record: PayrollRecord,
    /// The month the record was evaluated against.
    pub month: Month,
    /// Effective working days the amounts are based on.
    pub days_worked: u32,
    /// Working days in the whole target month.
    pub total_working_days: u32,
    /// Fraction (0..=1) of a full month covered by the assignment.
    pub proration: Decimal,
    /// Amount billed to the client for the month.
    pub billed_amount: Decimal,
    /// Prorated base salary component of the nurse's pay.
    pub base_salary_amount: Decimal,
    /// Prorated transportation component of the nurse's pay.
    pub transportation_amount: Decimal,
    /// Overtime pay at daily-salary rate. Never prorated.
    pub overtime_amount: Decimal,
    /// Total owed to the nurse for the month.
    pub payable_amount: Decimal,
    /// Billed amount minus payable amount. May be negative.
    pub profit: Decimal,
}
