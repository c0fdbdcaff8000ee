//! Core data models for the Severance Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod calculation_result;
mod component;
mod deduction;
mod period_input;

pub use calculation_result::{AuditStep, CalculationResult};
pub use component::SeveranceComponent;
pub use deduction::{ComponentBalance, DeductionRecord, ReconciliationResult};
pub use period_input::{ISO_DATE_FORMAT, PeriodInput, parse_iso_date};
