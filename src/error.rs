//! Error types for the payroll calculation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during payroll calculation.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the payroll calculation engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::InvalidMonth {
///     input: "2024-13".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid month identifier: 2024-13");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Store file was not found at the specified path.
    #[error("Store file not found: {path}")]
    StoreNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Store file could not be parsed.
    #[error("Failed to parse store file '{path}': {message}")]
    StoreParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Month identifier could not be parsed as a valid year-month.
    #[error("Invalid month identifier: {input}")]
    InvalidMonth {
        /// The identifier that failed to parse.
        input: String,
    },

    /// A payroll record's start date is after its end date.
    #[error("Invalid date range for record '{record_id}': {start} is after {end}")]
    InvalidDateRange {
        /// The ID of the offending record.
        record_id: String,
        /// The record's start date.
        start: NaiveDate,
        /// The record's end date.
        end: NaiveDate,
    },

    /// The export table could not be written.
    #[error("Export failed: {message}")]
    ExportFailed {
        /// A description of the export failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_not_found_displays_path() {
        let error = EngineError::StoreNotFound {
            path: "/missing/settings.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Store file not found: /missing/settings.yaml"
        );
    }

    #[test]
    fn test_store_parse_error_displays_path_and_message() {
        let error = EngineError::StoreParseError {
            path: "/store/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse store file '/store/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_month_displays_input() {
        let error = EngineError::InvalidMonth {
            input: "February".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid month identifier: February");
    }

    #[test]
    fn test_invalid_date_range_displays_record_and_dates() {
        let error = EngineError::InvalidDateRange {
            record_id: "rec_001".to_string(),
            start: NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid date range for record 'rec_001': 2024-03-10 is after 2024-03-01"
        );
    }

    #[test]
    fn test_export_failed_displays_message() {
        let error = EngineError::ExportFailed {
            message: "buffer write error".to_string(),
        };
        assert_eq!(error.to_string(), "Export failed: buffer write error");
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_invalid_month() -> EngineResult<()> {
            Err(EngineError::InvalidMonth {
                input: "bogus".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_invalid_month()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
