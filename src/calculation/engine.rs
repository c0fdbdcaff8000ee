//! The severance calculation engine.
//!
//! [`SeveranceEngine`] validates a [`PeriodInput`] once, at construction,
//! and then exposes the day count, each accrued component and the total
//! as pure accessors.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, CalculationResult, PeriodInput};

use super::accruals::{
    SAVINGS_INTEREST_RATE, VACATION_DIVISOR, checked_total, interest_on_savings,
    prorated_bonus, prorated_vacation, severance_savings,
};
use super::days_worked::{COMMERCIAL_YEAR_DAYS, count_days_worked};
use super::rounding::round_currency;

/// A validated severance calculation for one employment period.
///
/// Instances are immutable; every accessor returns the same value each
/// time it is called. The engine holds no shared state, so instances can
/// be built per request or shared read-only across threads.
///
/// # Example
///
/// ```
/// use severance_engine::calculation::SeveranceEngine;
/// use severance_engine::config::EngineConfig;
/// use rust_decimal::Decimal;
///
/// let engine = SeveranceEngine::from_iso(
///     Decimal::from(1_000_000),
///     "2023-01-01",
///     "2023-12-27",
///     &EngineConfig::default(),
/// )?;
///
/// assert_eq!(engine.days_worked(), 360);
/// assert_eq!(engine.bonuses(), Decimal::from(1_000_000));
/// assert_eq!(engine.interest_on_savings(), Decimal::from(120_000));
/// assert_eq!(engine.vacation(), Decimal::from(500_000));
/// assert_eq!(engine.total(), Decimal::from(2_620_000));
/// # Ok::<(), severance_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeveranceEngine {
    input: PeriodInput,
    days_worked: u32,
}

impl SeveranceEngine {
    /// Validates the input and builds an engine.
    ///
    /// Checks run in order and stop at the first failure:
    /// 1. `InvalidSalary` when the salary is below one currency unit
    /// 2. `DateTooEarly` when the start date precedes
    ///    `config.earliest_eligible_date`
    /// 3. `InvalidDateRange` when the end date is not after the start date
    /// 4. `InvalidSalary` when the salary is so large that the accruals for
    ///    the period would overflow [`Decimal`]
    pub fn new(input: PeriodInput, config: &EngineConfig) -> EngineResult<Self> {
        if input.salary < Decimal::ONE {
            return Err(EngineError::InvalidSalary {
                salary: input.salary,
            });
        }

        if input.start_date < config.earliest_eligible_date {
            return Err(EngineError::DateTooEarly {
                start_date: input.start_date,
                earliest: config.earliest_eligible_date,
            });
        }

        if input.end_date <= input.start_date {
            return Err(EngineError::InvalidDateRange {
                start_date: input.start_date,
                end_date: input.end_date,
            });
        }

        let days_worked = count_days_worked(input.start_date, input.end_date);
        if checked_total(input.salary, days_worked).is_none() {
            return Err(EngineError::InvalidSalary {
                salary: input.salary,
            });
        }

        debug!(
            salary = %input.salary,
            start_date = %input.start_date,
            end_date = %input.end_date,
            days_worked,
            "Severance engine constructed"
        );

        Ok(Self { input, days_worked })
    }

    /// Parses ISO-8601 date strings and builds an engine.
    ///
    /// Fails with `InvalidDate` before any other validation if a date does
    /// not parse.
    pub fn from_iso(
        salary: Decimal,
        start_date: &str,
        end_date: &str,
        config: &EngineConfig,
    ) -> EngineResult<Self> {
        let input = PeriodInput::parse(salary, start_date, end_date)?;
        Self::new(input, config)
    }

    /// Returns the validated input.
    pub fn input(&self) -> &PeriodInput {
        &self.input
    }

    /// Returns the salary.
    pub fn salary(&self) -> Decimal {
        self.input.salary
    }

    /// Returns the first day of the period.
    pub fn start_date(&self) -> NaiveDate {
        self.input.start_date
    }

    /// Returns the last day of the period.
    pub fn end_date(&self) -> NaiveDate {
        self.input.end_date
    }

    /// Whole days between start and end, capped at 360.
    pub fn days_worked(&self) -> u32 {
        self.days_worked
    }

    /// Prorated bonus ("primas"): `salary * days / 360`.
    pub fn bonuses(&self) -> Decimal {
        prorated_bonus(self.input.salary, self.days_worked)
    }

    /// Severance fund accrual ("cesantías"); always equal to [`bonuses`](Self::bonuses).
    pub fn savings(&self) -> Decimal {
        severance_savings(self.input.salary, self.days_worked)
    }

    /// Interest on the severance fund, in whole currency units.
    pub fn interest_on_savings(&self) -> Decimal {
        interest_on_savings(self.savings(), self.days_worked)
    }

    /// Accrued vacation pay ("vacaciones"): `salary * days / 720`.
    pub fn vacation(&self) -> Decimal {
        prorated_vacation(self.input.salary, self.days_worked)
    }

    /// Sum of the four components, rounded once to whole currency units.
    pub fn total(&self) -> Decimal {
        round_currency(
            self.bonuses() + self.savings() + self.interest_on_savings() + self.vacation(),
        )
    }

    /// Captures every accessor in a serializable result.
    pub fn result(&self) -> CalculationResult {
        CalculationResult {
            salary: self.input.salary,
            start_date: self.input.start_date,
            end_date: self.input.end_date,
            days_worked: self.days_worked,
            bonuses: self.bonuses(),
            savings: self.savings(),
            interest_on_savings: self.interest_on_savings(),
            vacation: self.vacation(),
            total: self.total(),
        }
    }

    /// Explains the calculation as an ordered list of audit steps.
    ///
    /// One step each for the day count, the four components and the total.
    pub fn audit_trace(&self) -> Vec<AuditStep> {
        let salary = self.input.salary.normalize();
        let days = self.days_worked;
        let bonuses = self.bonuses();
        let savings = self.savings();
        let interest = self.interest_on_savings();
        let vacation = self.vacation();
        let total = self.total();

        vec![
            AuditStep {
                step_number: 1,
                rule_id: "days_worked".to_string(),
                rule_name: "Days Worked".to_string(),
                input: serde_json::json!({
                    "start_date": self.input.start_date.to_string(),
                    "end_date": self.input.end_date.to_string(),
                    "cap": COMMERCIAL_YEAR_DAYS
                }),
                output: serde_json::json!({ "days_worked": days }),
                reasoning: format!(
                    "{} to {} counted as {} days (max {})",
                    self.input.start_date, self.input.end_date, days, COMMERCIAL_YEAR_DAYS
                ),
            },
            AuditStep {
                step_number: 2,
                rule_id: "primas".to_string(),
                rule_name: "Primas".to_string(),
                input: serde_json::json!({
                    "salary": salary.to_string(),
                    "days_worked": days
                }),
                output: serde_json::json!({ "bonuses": bonuses.to_string() }),
                reasoning: format!(
                    "${} x {} / {} = ${}",
                    salary,
                    days,
                    COMMERCIAL_YEAR_DAYS,
                    bonuses.round_dp(2)
                ),
            },
            AuditStep {
                step_number: 3,
                rule_id: "cesantias".to_string(),
                rule_name: "Cesantias".to_string(),
                input: serde_json::json!({
                    "salary": salary.to_string(),
                    "days_worked": days
                }),
                output: serde_json::json!({ "savings": savings.to_string() }),
                reasoning: format!(
                    "Accrues at the same rate as primas: ${}",
                    savings.round_dp(2)
                ),
            },
            AuditStep {
                step_number: 4,
                rule_id: "intereses_cesantias".to_string(),
                rule_name: "Intereses sobre cesantias".to_string(),
                input: serde_json::json!({
                    "savings": savings.to_string(),
                    "days_worked": days,
                    "rate": SAVINGS_INTEREST_RATE.to_string()
                }),
                output: serde_json::json!({ "interest_on_savings": interest.to_string() }),
                reasoning: format!(
                    "round(${} x {} x {} / {}) = ${}",
                    savings.round_dp(2),
                    days,
                    SAVINGS_INTEREST_RATE,
                    COMMERCIAL_YEAR_DAYS,
                    interest
                ),
            },
            AuditStep {
                step_number: 5,
                rule_id: "vacaciones".to_string(),
                rule_name: "Vacaciones".to_string(),
                input: serde_json::json!({
                    "salary": salary.to_string(),
                    "days_worked": days
                }),
                output: serde_json::json!({ "vacation": vacation.to_string() }),
                reasoning: format!(
                    "${} x {} / {} = ${}",
                    salary,
                    days,
                    VACATION_DIVISOR,
                    vacation.round_dp(2)
                ),
            },
            AuditStep {
                step_number: 6,
                rule_id: "total".to_string(),
                rule_name: "Total Liquidacion".to_string(),
                input: serde_json::json!({
                    "bonuses": bonuses.to_string(),
                    "savings": savings.to_string(),
                    "interest_on_savings": interest.to_string(),
                    "vacation": vacation.to_string()
                }),
                output: serde_json::json!({ "total": total.to_string() }),
                reasoning: format!("Sum of components rounded once = ${}", total),
            },
        ]
    }
}
