//! Aggregate financial models: monthly company totals and client breakdowns.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{CalculatedPayrollRecord, Month};

/// Company-level financial totals for one calendar month.
///
/// Produced by [`calculate_monthly_financials`] over a record set and the
/// staff roster. Carries the full list of calculated records so downstream
/// consumers (table display, export, client breakdown) do not recompute.
///
/// [`calculate_monthly_financials`]: crate::calculation::calculate_monthly_financials
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyFinancials {
    /// The month the totals cover.
    pub month: Month,
    /// Total billed to clients across all records.
    pub billed_income: Decimal,
    /// Total payable to nurses across all records.
    pub nurse_expenses: Decimal,
    /// `billed_income - nurse_expenses`.
    pub gross_profit: Decimal,
    /// Flat sum of internal staff monthly salaries. Never prorated.
    pub staff_cost: Decimal,
    /// `gross_profit - staff_cost`.
    pub net_profit: Decimal,
    /// Net profit as a percentage of billed income; 0 when nothing was billed.
    pub profit_margin: Decimal,
    /// Every record evaluated for the month, in input order.
    pub records: Vec<CalculatedPayrollRecord>,
}

/// Per-client income, expense and profit rollup for one month.
///
/// Entries appear in the order their client was first encountered while
/// scanning the calculated records; only clients with at least one
/// contributing record appear.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientBreakdownEntry {
    /// The client the entry aggregates.
    pub client_id: String,
    /// The client's display name from the roster.
    pub client_name: String,
    /// Total billed to the client.
    pub income: Decimal,
    /// Total nurse pay attributable to the client's placements.
    pub expenses: Decimal,
    /// `income - expenses`.
    pub profit: Decimal,
    /// Profit as a percentage of income; 0 when income is 0.
    pub margin: Decimal,
}
