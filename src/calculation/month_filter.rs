//! Month membership predicate.

use crate::models::{Month, PayrollRecord};

/// Returns true when a record's assignment interval touches the month.
///
/// A record is excluded only when its entire interval lies strictly before
/// the month start or strictly after the month end. This is deliberately
/// looser than "starts or ends in the month": a single assignment may span
/// several months and must surface in each of them.
///
/// Callers apply this filter before feeding records into the monthly or
/// client aggregations.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use payroll_engine::calculation::record_matches_month;
/// use payroll_engine::models::PayrollRecord;
/// use rust_decimal::Decimal;
///
/// let record = PayrollRecord {
///     id: "rec_001".to_string(),
///     nurse_id: "nurse_001".to_string(),
///     client_id: "client_001".to_string(),
///     contract_amount: Decimal::new(3000, 0),
///     salary: Decimal::new(2000, 0),
///     transportation: Decimal::ZERO,
///     overtime_days: Decimal::ZERO,
///     fines: Decimal::ZERO,
///     start_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
///     full_month: false,
///     created_at: chrono::Utc::now(),
/// };
///
/// assert!(record_matches_month(&record, "2024-02".parse().unwrap()));
/// assert!(!record_matches_month(&record, "2024-04".parse().unwrap()));
/// ```
pub fn record_matches_month(record: &PayrollRecord, month: Month) -> bool {
    let bounds = month.bounds();
    !(record.end_date < bounds.start || record.start_date > bounds.end)
}
