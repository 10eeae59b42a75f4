//! Store boundary for the payroll engine.
//!
//! This module loads the company dataset — settings and the nurse, staff and
//! client rosters — from YAML files. The calculation core never touches it;
//! only the API layer reads it.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::store::StoreLoader;
//!
//! let store = StoreLoader::load("./store/company").unwrap();
//! println!("{} nurses on roster", store.nurses().len());
//! ```

mod loader;
mod types;

pub use loader::StoreLoader;
pub use types::{ClientsFile, CompanySettings, CurrencyCode, NursesFile, StaffFile};
