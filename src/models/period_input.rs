//! Employment period input model.
//!
//! This module contains the [`PeriodInput`] type: the salary and date range
//! a single severance calculation is run against.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The accepted format for date strings.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// The salary and employment period for one calculation.
///
/// `PeriodInput` carries no validation of its own; the invariants
/// (positive salary, eligible start date, ordered range) are enforced when
/// a [`SeveranceEngine`](crate::calculation::SeveranceEngine) is built from it.
///
/// # Example
///
/// ```
/// use severance_engine::models::PeriodInput;
/// use rust_decimal::Decimal;
///
/// let input = PeriodInput::parse(Decimal::new(1_000_000, 0), "2023-01-01", "2023-07-01").unwrap();
/// assert_eq!(input.start_date.to_string(), "2023-01-01");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodInput {
    /// Monthly salary in whole or fractional currency units.
    pub salary: Decimal,
    /// First day of the employment period.
    pub start_date: NaiveDate,
    /// Last day of the employment period.
    pub end_date: NaiveDate,
}

impl PeriodInput {
    /// Creates an input from already-typed values.
    pub fn new(salary: Decimal, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            salary,
            start_date,
            end_date,
        }
    }

    /// Creates an input from ISO-8601 (`YYYY-MM-DD`) date strings.
    ///
    /// Fails with `InvalidDate` if either string is not a calendar date.
    pub fn parse(salary: Decimal, start_date: &str, end_date: &str) -> EngineResult<Self> {
        Ok(Self {
            salary,
            start_date: parse_iso_date(start_date)?,
            end_date: parse_iso_date(end_date)?,
        })
    }
}

/// Parses a `YYYY-MM-DD` string into a date.
pub fn parse_iso_date(value: &str) -> EngineResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), ISO_DATE_FORMAT).map_err(|e| {
        EngineError::InvalidDate {
            value: value.to_string(),
            message: e.to_string(),
        }
    })
}
