//! Request types for the Severance Engine API.
//!
//! This module defines the JSON request structures for the `/calculate`
//! and `/reconcile` endpoints. Dates travel as `YYYY-MM-DD` strings and are
//! parsed by the engine, so a malformed date surfaces as `INVALID_DATE`
//! rather than a generic JSON error.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::error::EngineResult;
use crate::models::{DeductionRecord, PeriodInput};

/// Request body for the `/calculate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// Monthly salary. Defaults to the configured minimum wage when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<Decimal>,
    /// First day of the employment period.
    pub start_date: String,
    /// Last day of the employment period.
    pub end_date: String,
}

impl CalculationRequest {
    /// Resolves the salary default and parses the dates.
    pub fn to_input(&self, config: &EngineConfig) -> EngineResult<PeriodInput> {
        PeriodInput::parse(
            self.salary.unwrap_or(config.minimum_wage),
            &self.start_date,
            &self.end_date,
        )
    }
}

/// Request body for the `/reconcile` endpoint.
///
/// Carries the full period alongside the deductions; the server keeps no
/// record of earlier calculations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReconciliationRequest {
    /// Monthly salary. Defaults to the configured minimum wage when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<Decimal>,
    /// First day of the employment period.
    pub start_date: String,
    /// Last day of the employment period.
    pub end_date: String,
    /// Amounts already paid against each component.
    #[serde(default)]
    pub deductions: DeductionRecord,
}

impl ReconciliationRequest {
    /// Resolves the salary default and parses the dates.
    pub fn to_input(&self, config: &EngineConfig) -> EngineResult<PeriodInput> {
        PeriodInput::parse(
            self.salary.unwrap_or(config.minimum_wage),
            &self.start_date,
            &self.end_date,
        )
    }
}
