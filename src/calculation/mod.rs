//! Calculation logic for the payroll engine.
//!
//! This module contains all the calculation functions: working-day counting,
//! assignment range clamping, per-record financial derivation, monthly
//! aggregation, the per-client breakdown, the month membership predicate
//! used to pre-filter records, and invoice number sequencing.

mod client_breakdown;
mod invoice;
mod month_filter;
mod monthly;
mod range_clamp;
mod record_financials;
mod working_days;

pub use client_breakdown::calculate_client_breakdown;
pub use invoice::{DEFAULT_INVOICE_PREFIX, next_invoice_number};
pub use month_filter::record_matches_month;
pub use monthly::calculate_monthly_financials;
pub use range_clamp::{ClampedRange, clamp_range_to_month};
pub use record_financials::calculate_record_financials;
pub use working_days::count_working_days;
