//! Payroll and billing calculation engine for a nurse staffing agency.
//!
//! For each placement (a payroll record) this crate computes, for a given
//! calendar month, how much to bill the client, how much to pay the nurse,
//! and the resulting profit, prorating amounts when the placement covers only
//! part of the month. Per-record results aggregate into monthly company
//! financials and per-client profitability breakdowns.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod error;
pub mod export;
pub mod models;
pub mod store;
