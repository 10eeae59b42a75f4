//! Working-day counting.
//!
//! A working day is a Monday-Friday calendar date. Weekends are always
//! excluded; public holidays are deliberately not modelled.

use chrono::{Datelike, NaiveDate, Weekday};

/// Returns true for Saturday and Sunday dates.
fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Counts the working days in the inclusive interval `[start, end]`.
///
/// Returns 0 when `start > end` — an empty range is not an error.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use payroll_engine::calculation::count_working_days;
///
/// let start = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
/// assert_eq!(count_working_days(start, end), 21);
///
/// // Reversed range counts as empty
/// assert_eq!(count_working_days(end, start), 0);
/// ```
pub fn count_working_days(start: NaiveDate, end: NaiveDate) -> u32 {
    if start > end {
        return 0;
    }
    start
        .iter_days()
        .take_while(|day| *day <= end)
        .filter(|day| !is_weekend(*day))
        .count() as u32
}
