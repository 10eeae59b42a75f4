//! Monthly company-level aggregation.

use rust_decimal::Decimal;

use super::record_financials::calculate_record_financials;
use crate::models::{Month, MonthlyFinancials, PayrollRecord, StaffMember};

/// Aggregates a record set and the staff roster into monthly totals.
///
/// Every supplied record is evaluated — callers pre-filter with
/// [`record_matches_month`] so that only assignments touching the month are
/// passed in. Staff salaries are summed flat: staff are not
/// assignment-based, so their cost is never prorated.
///
/// The profit margin measures net profit against billed revenue and is 0
/// when nothing was billed, so an idle month never produces a division by
/// zero.
///
/// [`record_matches_month`]: super::record_matches_month
pub fn calculate_monthly_financials(
    records: &[PayrollRecord],
    staff: &[StaffMember],
    month: Month,
) -> MonthlyFinancials {
    let calculated: Vec<_> = records
        .iter()
        .map(|record| calculate_record_financials(record, month))
        .collect();

    let billed_income: Decimal = calculated.iter().map(|calc| calc.billed_amount).sum();
    let nurse_expenses: Decimal = calculated.iter().map(|calc| calc.payable_amount).sum();

    let gross_profit = billed_income - nurse_expenses;
    let staff_cost: Decimal = staff.iter().map(|member| member.monthly_salary).sum();
    let net_profit = gross_profit - staff_cost;

    let profit_margin = if billed_income > Decimal::ZERO {
        net_profit / billed_income * Decimal::from(100)
    } else {
        Decimal::ZERO
    };

    MonthlyFinancials {
        month,
        billed_income,
        nurse_expenses,
        gross_profit,
        staff_cost,
        net_profit,
        profit_margin,
        records: calculated,
    }
}
