//! Assignment range clamping.
//!
//! Isolates the portion of an assignment that falls inside a queried month,
//! regardless of how far outside the month the recorded dates extend.

use chrono::NaiveDate;

use super::working_days::count_working_days;
use crate::models::{Month, PayrollRecord};

/// The effective worked sub-range of an assignment within one month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClampedRange {
    /// First day of the intersection (inclusive).
    pub start: NaiveDate,
    /// Last day of the intersection (inclusive).
    pub end: NaiveDate,
    /// Working days inside the intersection. 0 when there is no overlap.
    pub days_worked: u32,
}

/// Intersects a record's assignment interval with a month's interval.
///
/// When the assignment does not overlap the month at all, the range
/// collapses (`start == end`) and `days_worked` is 0.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use payroll_engine::calculation::clamp_range_to_month;
/// use payroll_engine::models::{Month, PayrollRecord};
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
///     start_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
///     full_month: false,
///     created_at: chrono::Utc::now(),
/// };
///
/// let month: Month = "2024-02".parse().unwrap();
/// let clamped = clamp_range_to_month(&record, month);
/// assert_eq!(clamped.start, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
/// assert_eq!(clamped.end, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
/// assert_eq!(clamped.days_worked, 21);
/// ```
pub fn clamp_range_to_month(record: &PayrollRecord, month: Month) -> ClampedRange {
    let bounds = month.bounds();

    let range_start = record.start_date.max(bounds.start);
    let range_end = record.end_date.min(bounds.end);

    if range_start > range_end {
        return ClampedRange {
            start: range_start,
            end: range_start,
            days_worked: 0,
        };
    }

    ClampedRange {
        start: range_start,
        end: range_end,
        days_worked: count_working_days(range_start, range_end),
    }
}
