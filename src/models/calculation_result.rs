//! Calculation result models for the Severance Engine.
//!
//! This module contains the [`CalculationResult`] type capturing every
//! output of a severance calculation, and the [`AuditStep`] type used to
//! explain how each figure was derived.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::SeveranceComponent;

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for one formula.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The complete result of a severance calculation.
///
/// A snapshot of every accessor on a
/// [`SeveranceEngine`](crate::calculation::SeveranceEngine), in a form that
/// can be serialized or rendered.
///
/// The `Display` implementation renders the plain-text liquidación summary:
/// monetary accruals with two decimals, interest and total as integers.
///
/// # Example
///
/// ```
/// use severance_engine::calculation::SeveranceEngine;
/// use severance_engine::config::EngineConfig;
/// use severance_engine::models::PeriodInput;
/// use rust_decimal::Decimal;
///
/// let input = PeriodInput::parse(Decimal::new(1_000_000, 0), "2023-01-01", "2023-07-01").unwrap();
/// let result = SeveranceEngine::new(input, &EngineConfig::default()).unwrap().result();
///
/// let summary = result.to_string();
/// assert!(summary.contains("Total liquidacion due for 181 days worked at $1000000"));
/// assert!(summary.contains("Primas: 502777.78"));
/// assert!(summary.contains("Total: 1287278"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// The salary the calculation was run against.
    pub salary: Decimal,
    /// First day of the employment period.
    pub start_date: NaiveDate,
    /// Last day of the employment period.
    pub end_date: NaiveDate,
    /// Days counted towards accrual, between 1 and 360.
    pub days_worked: u32,
    /// Prorated bonus ("primas").
    pub bonuses: Decimal,
    /// Severance fund accrual ("cesantías"); always equal to `bonuses`.
    pub savings: Decimal,
    /// Interest on the severance fund, in whole currency units.
    pub interest_on_savings: Decimal,
    /// Accrued vacation pay.
    pub vacation: Decimal,
    /// Sum of all components, rounded once to whole currency units.
    pub total: Decimal,
}

impl CalculationResult {
    /// Returns the calculated amount for a single component.
    pub fn component(&self, component: SeveranceComponent) -> Decimal {
        match component {
            SeveranceComponent::Primas => self.bonuses,
            SeveranceComponent::Cesantias => self.savings,
            SeveranceComponent::Intereses => self.interest_on_savings,
            SeveranceComponent::Vacaciones => self.vacation,
        }
    }
}

fn two_places(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

impl fmt::Display for CalculationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Total liquidacion due for {} days worked at ${}:",
            self.days_worked,
            self.salary.normalize()
        )?;
        writeln!(
            f,
            "    {}: {:.2}",
            SeveranceComponent::Primas,
            two_places(self.bonuses)
        )?;
        writeln!(
            f,
            "    {}: {:.2}",
            SeveranceComponent::Cesantias,
            two_places(self.savings)
        )?;
        writeln!(
            f,
            "    {}: {}",
            SeveranceComponent::Intereses,
            self.interest_on_savings.normalize()
        )?;
        writeln!(
            f,
            "    {}: {:.2}",
            SeveranceComponent::Vacaciones,
            two_places(self.vacation)
        )?;
        write!(f, "    Total: {}", self.total.normalize())
    }
}
