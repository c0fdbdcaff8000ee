//! Error types for the Severance Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the engine can report. Input validation errors are
//! raised once, at construction time; a validly constructed engine never
//! fails afterwards.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the Severance Engine.
///
/// # Example
///
/// ```
/// use severance_engine::error::EngineError;
/// use rust_decimal::Decimal;
///
/// let error = EngineError::InvalidSalary {
///     salary: Decimal::ZERO,
/// };
/// assert_eq!(error.to_string(), "Salary must be at least 1 and within the calculable range (got 0)");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The salary was below the minimum currency unit, or too large to calculate.
    #[error("Salary must be at least 1 and within the calculable range (got {salary})")]
    InvalidSalary {
        /// The rejected salary.
        salary: Decimal,
    },

    /// The start date precedes the configured earliest eligible date.
    #[error("Start date {start_date} is before the earliest eligible date {earliest}")]
    DateTooEarly {
        /// The rejected start date.
        start_date: NaiveDate,
        /// The configured earliest eligible date.
        earliest: NaiveDate,
    },

    /// The end date is not strictly after the start date.
    #[error("End date {end_date} must be after start date {start_date}")]
    InvalidDateRange {
        /// The start of the period.
        start_date: NaiveDate,
        /// The end of the period.
        end_date: NaiveDate,
    },

    /// A date string could not be parsed as an ISO-8601 calendar date.
    #[error("Invalid date '{value}': {message}")]
    InvalidDate {
        /// The raw value that failed to parse.
        value: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_invalid_salary_displays_value() {
        let error = EngineError::InvalidSalary {
            salary: Decimal::new(-1000, 0),
        };
        assert_eq!(
            error.to_string(),
            "Salary must be at least 1 and within the calculable range (got -1000)"
        );
    }

    #[test]
    fn test_date_too_early_displays_both_dates() {
        let error = EngineError::DateTooEarly {
            start_date: date(2019, 12, 31),
            earliest: date(2020, 1, 1),
        };
        assert_eq!(
            error.to_string(),
            "Start date 2019-12-31 is before the earliest eligible date 2020-01-01"
        );
    }

    #[test]
    fn test_invalid_date_range_displays_both_dates() {
        let error = EngineError::InvalidDateRange {
            start_date: date(2023, 6, 1),
            end_date: date(2023, 1, 1),
        };
        assert_eq!(
            error.to_string(),
            "End date 2023-01-01 must be after start date 2023-06-01"
        );
    }

    #[test]
    fn test_invalid_date_displays_value_and_message() {
        let error = EngineError::InvalidDate {
            value: "2023-13-01".to_string(),
            message: "input is out of range".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid date '2023-13-01': input is out of range"
        );
    }

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/severance.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/severance.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_invalid_salary() -> EngineResult<()> {
            Err(EngineError::InvalidSalary {
                salary: Decimal::ZERO,
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_invalid_salary()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
