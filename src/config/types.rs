//! Configuration types for severance calculation.
//!
//! This module contains the strongly-typed configuration structure that
//! is deserialized from YAML configuration files.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The earliest eligible start date used by the 2020 revision of the policy.
///
/// This is the default for [`EngineConfig::earliest_eligible_date`].
pub fn earliest_eligible_date_2020() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 1, 1).expect("2020-01-01 is a valid calendar date")
}

/// The earliest eligible start date used by the 2023 revision of the policy.
pub fn earliest_eligible_date_2023() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 1, 1).expect("2023-01-01 is a valid calendar date")
}

/// The monthly minimum wage in COP used when no salary is supplied.
pub const DEFAULT_MINIMUM_WAGE: Decimal = Decimal::from_parts(877_803, 0, 0, false, 0);

/// Policy parameters for the severance engine.
///
/// Neither value is derived from the statute itself; both are policy
/// choices that a host can override without recompiling.
///
/// # Example
///
/// ```
/// use severance_engine::config::{EngineConfig, earliest_eligible_date_2023};
///
/// let config = EngineConfig::default().with_earliest_eligible_date(earliest_eligible_date_2023());
/// assert_eq!(config.earliest_eligible_date.to_string(), "2023-01-01");
/// assert_eq!(config.minimum_wage.to_string(), "877803");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Start dates before this date are rejected with `DateTooEarly`.
    #[serde(default = "earliest_eligible_date_2020")]
    pub earliest_eligible_date: NaiveDate,
    /// Salary used when a request omits one.
    #[serde(default = "default_minimum_wage")]
    pub minimum_wage: Decimal,
}

fn default_minimum_wage() -> Decimal {
    DEFAULT_MINIMUM_WAGE
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            earliest_eligible_date: earliest_eligible_date_2020(),
            minimum_wage: DEFAULT_MINIMUM_WAGE,
        }
    }
}

impl EngineConfig {
    /// Returns a copy of this configuration with a different earliest eligible date.
    pub fn with_earliest_eligible_date(mut self, date: NaiveDate) -> Self {
        self.earliest_eligible_date = date;
        self
    }

    /// Returns a copy of this configuration with a different minimum wage.
    pub fn with_minimum_wage(mut self, minimum_wage: Decimal) -> Self {
        self.minimum_wage = minimum_wage;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_uses_2020_epoch_and_minimum_wage() {
        let config = EngineConfig::default();
        assert_eq!(config.earliest_eligible_date, earliest_eligible_date_2020());
        assert_eq!(config.minimum_wage, Decimal::new(877803, 0));
    }

    #[test]
    fn test_historical_epochs() {
        assert_eq!(earliest_eligible_date_2020().to_string(), "2020-01-01");
        assert_eq!(earliest_eligible_date_2023().to_string(), "2023-01-01");
    }

    #[test]
    fn test_builder_overrides() {
        let config = EngineConfig::default()
            .with_earliest_eligible_date(earliest_eligible_date_2023())
            .with_minimum_wage(Decimal::new(1_300_000, 0));

        assert_eq!(config.earliest_eligible_date, earliest_eligible_date_2023());
        assert_eq!(config.minimum_wage, Decimal::new(1_300_000, 0));
    }

    #[test]
    fn test_deserialize_partial_yaml_fills_defaults() {
        let config: EngineConfig = serde_yaml::from_str("earliest_eligible_date: 2023-01-01\n").unwrap();
        assert_eq!(config.earliest_eligible_date, earliest_eligible_date_2023());
        assert_eq!(config.minimum_wage, DEFAULT_MINIMUM_WAGE);
    }
}
