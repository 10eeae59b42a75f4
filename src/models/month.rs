//! Calendar month identifier and derived month bounds.
//!
//! This module defines the [`Month`] value type used to select the calendar
//! month a payroll calculation is evaluated against, and the [`MonthBounds`]
//! range it resolves to.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A calendar month identified by a 4-digit year and a 1-indexed month.
///
/// Parses from and serializes to the `"YYYY-MM"` form used throughout the
/// system (payload fields, export filenames, store data).
///
/// # Example
///
/// ```
/// use payroll_engine::models::Month;
///
/// let month: Month = "2024-02".parse().unwrap();
/// assert_eq!(month.year(), 2024);
/// assert_eq!(month.month(), 2);
/// assert_eq!(month.to_string(), "2024-02");
///
/// assert!("2024-13".parse::<Month>().is_err());
/// assert!("Feb 2024".parse::<Month>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Month {
    year: i32,
    month: u32,
}

/// The first and last calendar day of a month, both inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthBounds {
    /// The 1st of the month.
    pub start: NaiveDate,
    /// The last calendar day of the month (28-31 depending on month and leap year).
    pub end: NaiveDate,
}

impl Month {
    /// Creates a month from a year and 1-indexed month number.
    ///
    /// Returns [`EngineError::InvalidMonth`] when the pair does not name a
    /// real calendar month.
    pub fn new(year: i32, month: u32) -> EngineResult<Self> {
        if !(1..=9999).contains(&year) || NaiveDate::from_ymd_opt(year, month, 1).is_none() {
            return Err(EngineError::InvalidMonth {
                input: format!("{year:04}-{month:02}"),
            });
        }
        Ok(Self { year, month })
    }

    /// Returns the 4-digit year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the 1-indexed month number.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Resolves the first and last calendar day of this month.
    ///
    /// # Example
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use payroll_engine::models::Month;
    ///
    /// let bounds = "2024-02".parse::<Month>().unwrap().bounds();
    /// assert_eq!(bounds.start, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
    /// assert_eq!(bounds.end, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()); // leap year
    /// ```
    pub fn bounds(&self) -> MonthBounds {
        // Both constructions are infallible for a month validated in `new`.
        let start = NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .expect("month is validated on construction");
        let (next_year, next_month) = if self.month == 12 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        };
        let end = NaiveDate::from_ymd_opt(next_year, next_month, 1)
            .expect("month is validated on construction")
            .pred_opt()
            .expect("the first of a month always has a predecessor");
        MonthBounds { start, end }
    }

    /// Returns a human-readable label such as `"February 2024"`.
    ///
    /// Used by document headers and statement titles.
    pub fn label(&self) -> String {
        self.bounds().start.format("%B %Y").to_string()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for Month {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || EngineError::InvalidMonth {
            input: s.to_string(),
        };

        let (year_part, month_part) = s.split_once('-').ok_or_else(invalid)?;
        if year_part.len() != 4
            || month_part.len() != 2
            || !year_part.bytes().all(|b| b.is_ascii_digit())
            || !month_part.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }

        let year: i32 = year_part.parse().map_err(|_| invalid())?;
        let month: u32 = month_part.parse().map_err(|_| invalid())?;
        Month::new(year, month).map_err(|_| invalid())
    }
}

impl TryFrom<String> for Month {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Month> for String {
    fn from(month: Month) -> Self {
        month.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn month(s: &str) -> Month {
        s.parse().unwrap()
    }

    /// MO-001: valid identifier parses
    #[test]
    fn test_parse_valid_month() {
        let m = month("2024-02");
        assert_eq!(m.year(), 2024);
        assert_eq!(m.month(), 2);
    }

    /// MO-002: month out of range rejected
    #[test]
    fn test_parse_month_out_of_range() {
        assert!("2024-00".parse::<Month>().is_err());
        assert!("2024-13".parse::<Month>().is_err());
    }

    /// MO-003: malformed identifiers rejected
    #[test]
    fn test_parse_malformed_identifiers() {
        for input in ["", "2024", "2024-2", "24-02", "2024/02", "2024-xx", "x024-02"] {
            let result = input.parse::<Month>();
            assert!(result.is_err(), "expected '{}' to be rejected", input);
            match result.unwrap_err() {
                EngineError::InvalidMonth { input: reported } => assert_eq!(reported, input),
                other => panic!("Expected InvalidMonth, got {:?}", other),
            }
        }
    }

    /// MO-004: bounds of a leap-year February
    #[test]
    fn test_bounds_leap_february() {
        let bounds = month("2024-02").bounds();
        assert_eq!(bounds.start, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        assert_eq!(bounds.end, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    }

    /// MO-005: bounds of a non-leap February
    #[test]
    fn test_bounds_common_february() {
        let bounds = month("2023-02").bounds();
        assert_eq!(bounds.end, NaiveDate::from_ymd_opt(2023, 2, 28).unwrap());
    }

    /// MO-006: bounds of a December roll over the year
    #[test]
    fn test_bounds_december() {
        let bounds = month("2024-12").bounds();
        assert_eq!(bounds.start, NaiveDate::from_ymd_opt(2024, 12, 1).unwrap());
        assert_eq!(bounds.end, NaiveDate::from_ymd_opt(2024, 12, 31).unwrap());
    }

    #[test]
    fn test_bounds_thirty_day_month() {
        let bounds = month("2024-04").bounds();
        assert_eq!(bounds.end, NaiveDate::from_ymd_opt(2024, 4, 30).unwrap());
    }

    #[test]
    fn test_display_round_trip() {
        for input in ["2024-01", "2024-12", "1999-06"] {
            assert_eq!(month(input).to_string(), input);
        }
    }

    #[test]
    fn test_label() {
        assert_eq!(month("2024-02").label(), "February 2024");
        assert_eq!(month("2025-11").label(), "November 2025");
    }

    #[test]
    fn test_new_rejects_invalid_pairs() {
        assert!(Month::new(2024, 0).is_err());
        assert!(Month::new(2024, 13).is_err());
        assert!(Month::new(0, 5).is_err());
        assert!(Month::new(10000, 5).is_err());
    }

    #[test]
    fn test_serialize_as_string() {
        let json = serde_json::to_string(&month("2024-02")).unwrap();
        assert_eq!(json, "\"2024-02\"");
    }

    #[test]
    fn test_deserialize_from_string() {
        let m: Month = serde_json::from_str("\"2024-07\"").unwrap();
        assert_eq!(m, month("2024-07"));
    }

    #[test]
    fn test_deserialize_rejects_invalid() {
        assert!(serde_json::from_str::<Month>("\"2024-99\"").is_err());
    }

    #[test]
    fn test_ordering_is_chronological() {
        assert!(month("2023-12") < month("2024-01"));
        assert!(month("2024-01") < month("2024-02"));
    }
}
