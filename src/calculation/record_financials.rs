//! Per-record financial derivation.
//!
//! This module turns one payroll record and a target month into a fully
//! derived [`CalculatedPayrollRecord`]: billed amount, payable amount,
//! profit, and the proration factor that links them.

use rust_decimal::Decimal;

use super::range_clamp::clamp_range_to_month;
use super::working_days::count_working_days;
use crate::models::{CalculatedPayrollRecord, Month, PayrollRecord};

/// Derives the financial figures for one payroll record in one month.
///
/// The monthly contract amount, salary and transportation allowance are
/// scaled by the proration factor; overtime is paid in full at the daily
/// salary rate and fines are deducted in full, both regardless of proration
/// (overtime represents extra days actually worked beyond the base
/// schedule).
///
/// A record flagged `full_month` is billed and paid as a complete month no
/// matter what its dates say. A record whose `start_date` is after its
/// `end_date` degrades to a zero-day, zero-proration contribution rather
/// than failing, so one malformed record cannot abort a whole month's
/// aggregation.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use payroll_engine::calculation::calculate_record_financials;
/// use payroll_engine::models::PayrollRecord;
/// use rust_decimal::Decimal;
///
/// let record = PayrollRecord {
///     id: "rec_001".to_string(),
///     nurse_id: "nurse_001".to_string(),
///     client_id: "client_001".to_string(),
///     contract_amount: Decimal::new(3000, 0),
///     salary: Decimal::new(2000, 0),
///     transportation: Decimal::new(300, 0),
///     overtime_days: Decimal::ZERO,
///     fines: Decimal::ZERO,
///     start_date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2024, 2, 29).unwrap(),
///     full_month: true,
///     created_at: chrono::Utc::now(),
/// };
///
/// let calc = calculate_record_financials(&record, "2024-02".parse().unwrap());
/// assert_eq!(calc.proration, Decimal::ONE);
/// assert_eq!(calc.billed_amount, Decimal::new(3000, 0));
/// assert_eq!(calc.payable_amount, Decimal::new(2300, 0));
/// assert_eq!(calc.profit, Decimal::new(700, 0));
/// ```
pub fn calculate_record_financials(
    record: &PayrollRecord,
    month: Month,
) -> CalculatedPayrollRecord {
    let bounds = month.bounds();
    let total_working_days = count_working_days(bounds.start, bounds.end);
    let days_worked = clamp_range_to_month(record, month).days_worked;

    let effective_days = if record.full_month {
        total_working_days
    } else {
        days_worked
    };

    let proration = if total_working_days == 0 {
        Decimal::ZERO
    } else if record.full_month {
        Decimal::ONE
    } else {
        // Clamped in case a partial range somehow exceeds the month total.
        (Decimal::from(effective_days) / Decimal::from(total_working_days)).min(Decimal::ONE)
    };

    let billed_amount = record.contract_amount * proration;
    let base_salary_amount = record.salary * proration;
    let transportation_amount = record.transportation * proration;

    // Fallback keeps a zero-working-day month from dividing by zero.
    let daily_salary = if total_working_days > 0 {
        record.salary / Decimal::from(total_working_days)
    } else {
        record.salary
    };
    let overtime_amount = record.overtime_days * daily_salary;

    let payable_amount =
        base_salary_amount + transportation_amount + overtime_amount - record.fines;
    let profit = billed_amount - payable_amount;

    CalculatedPayrollRecord {
        record: record.clone(),
        month,
        days_worked: effective_days,
        total_working_days,
        proration,
        billed_amount,
        base_salary_amount,
        transportation_amount,
        overtime_amount,
        payable_amount,
        profit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn month(s: &str) -> Month {
        s.parse().unwrap()
    }

    fn create_record(start: &str, end: &str, full_month: bool) -> PayrollRecord {
        PayrollRecord {
            id: "rec_001".to_string(),
            nurse_id: "nurse_001".to_string(),
            client_id: "client_001".to_string(),
            contract_amount: dec("3000"),
            salary: dec("2000"),
            transportation: dec("300"),
            overtime_days: Decimal::ZERO,
            fines: Decimal::ZERO,
            start_date: date(start),
            end_date: date(end),
            full_month,
            created_at: Utc::now(),
        }
    }

    /// RF-001: full-month record in February 2024
    #[test]
    fn test_full_month_february_2024() {
        let record = create_record("2024-02-01", "2024-02-29", true);
        let calc = calculate_record_financials(&record, month("2024-02"));

        assert_eq!(calc.total_working_days, 21);
        assert_eq!(calc.days_worked, 21);
        assert_eq!(calc.proration, Decimal::ONE);
        assert_eq!(calc.billed_amount, dec("3000"));
        assert_eq!(calc.base_salary_amount, dec("2000"));
        assert_eq!(calc.transportation_amount, dec("300"));
        assert_eq!(calc.payable_amount, dec("2300"));
        assert_eq!(calc.profit, dec("700"));
    }

    /// RF-002: partial month 15th-20th prorates at 4/21
    #[test]
    fn test_partial_month_prorates() {
        let record = create_record("2024-02-15", "2024-02-20", false);
        let calc = calculate_record_financials(&record, month("2024-02"));

        assert_eq!(calc.days_worked, 4);
        assert_eq!(calc.total_working_days, 21);
        assert_eq!(calc.proration, dec("4") / dec("21"));
        assert_eq!(calc.billed_amount, dec("3000") * (dec("4") / dec("21")));
        // ~571.43 when rounded for display
        assert_eq!(calc.billed_amount.round_dp(2), dec("571.43"));
    }

    /// RF-003: record entirely outside the month contributes nothing
    #[test]
    fn test_record_outside_month_contributes_nothing() {
        let record = create_record("2024-01-05", "2024-01-25", false);
        let calc = calculate_record_financials(&record, month("2024-02"));

        assert_eq!(calc.days_worked, 0);
        assert_eq!(calc.proration, Decimal::ZERO);
        assert_eq!(calc.billed_amount, Decimal::ZERO);
        assert_eq!(calc.payable_amount, Decimal::ZERO);
        assert_eq!(calc.profit, Decimal::ZERO);
    }

    /// RF-004: full-month flag overrides a non-overlapping range
    #[test]
    fn test_full_month_flag_overrides_overlap() {
        let record = create_record("2024-01-05", "2024-01-25", true);
        let calc = calculate_record_financials(&record, month("2024-02"));

        assert_eq!(calc.proration, Decimal::ONE);
        assert_eq!(calc.days_worked, 21);
        assert_eq!(calc.billed_amount, dec("3000"));
    }

    /// RF-005: overtime is paid at daily salary and never prorated
    #[test]
    fn test_overtime_not_prorated() {
        let mut record = create_record("2024-02-15", "2024-02-20", false);
        record.overtime_days = dec("2");
        let partial = calculate_record_financials(&record, month("2024-02"));

        record.full_month = true;
        let full = calculate_record_financials(&record, month("2024-02"));

        let expected_overtime = dec("2") * (dec("2000") / dec("21"));
        assert_eq!(partial.overtime_amount, expected_overtime);
        assert_eq!(full.overtime_amount, expected_overtime);
    }

    /// RF-006: fines are deducted in full regardless of proration
    #[test]
    fn test_fines_not_prorated() {
        let mut record = create_record("2024-02-15", "2024-02-20", false);
        record.fines = dec("150");
        let calc = calculate_record_financials(&record, month("2024-02"));

        let expected_payable =
            calc.base_salary_amount + calc.transportation_amount + calc.overtime_amount
                - dec("150");
        assert_eq!(calc.payable_amount, expected_payable);
    }

    /// RF-007: fractional overtime days
    #[test]
    fn test_fractional_overtime_days() {
        let mut record = create_record("2024-02-01", "2024-02-29", true);
        record.overtime_days = dec("1.5");
        let calc = calculate_record_financials(&record, month("2024-02"));

        assert_eq!(calc.overtime_amount, dec("1.5") * (dec("2000") / dec("21")));
    }

    /// RF-008: reversed dates degrade to zero contribution
    #[test]
    fn test_reversed_dates_degrade_to_zero() {
        let record = create_record("2024-02-20", "2024-02-10", false);
        let calc = calculate_record_financials(&record, month("2024-02"));

        assert_eq!(calc.days_worked, 0);
        assert_eq!(calc.proration, Decimal::ZERO);
        assert_eq!(calc.billed_amount, Decimal::ZERO);
        assert_eq!(calc.base_salary_amount, Decimal::ZERO);
    }

    /// RF-009: payable identity holds with every component active
    #[test]
    fn test_payable_identity() {
        let mut record = create_record("2024-02-05", "2024-02-23", false);
        record.overtime_days = dec("2.5");
        record.fines = dec("75");
        let calc = calculate_record_financials(&record, month("2024-02"));

        assert_eq!(
            calc.payable_amount,
            calc.base_salary_amount + calc.transportation_amount + calc.overtime_amount
                - dec("75")
        );
        assert_eq!(calc.profit, calc.billed_amount - calc.payable_amount);
    }

    /// RF-010: profit may go negative and is not clamped
    #[test]
    fn test_negative_profit_not_clamped() {
        let mut record = create_record("2024-02-01", "2024-02-29", true);
        record.contract_amount = dec("2000");
        record.salary = dec("2500");
        let calc = calculate_record_financials(&record, month("2024-02"));

        assert!(calc.profit < Decimal::ZERO);
        assert_eq!(calc.profit, dec("2000") - calc.payable_amount);
    }

    /// RF-011: identical inputs produce identical outputs
    #[test]
    fn test_recalculation_is_deterministic() {
        let mut record = create_record("2024-02-05", "2024-02-23", false);
        record.overtime_days = dec("1.5");
        record.fines = dec("50");

        let first = calculate_record_financials(&record, month("2024-02"));
        let second = calculate_record_financials(&record, month("2024-02"));
        assert_eq!(first, second);
    }

    #[test]
    fn test_month_is_recorded_on_output() {
        let record = create_record("2024-02-01", "2024-02-29", true);
        let calc = calculate_record_financials(&record, month("2024-02"));
        assert_eq!(calc.month, month("2024-02"));
    }

    #[test]
    fn test_zero_amounts_stay_zero() {
        let mut record = create_record("2024-02-01", "2024-02-29", true);
        record.contract_amount = Decimal::ZERO;
        record.salary = Decimal::ZERO;
        record.transportation = Decimal::ZERO;
        let calc = calculate_record_financials(&record, month("2024-02"));

        assert_eq!(calc.billed_amount, Decimal::ZERO);
        assert_eq!(calc.payable_amount, Decimal::ZERO);
        assert_eq!(calc.profit, Decimal::ZERO);
    }
}
