//! HTTP API module for the payroll engine.
//!
//! This module provides the REST endpoints for monthly payroll calculation,
//! CSV export, and invoice fact generation.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, InvoiceRequest, PayrollRecordRequest};
pub use response::{ApiError, InvoiceResponse, MonthlySummaryResponse};
pub use state::AppState;
