//! Deduction and reconciliation models.
//!
//! This module contains the [`DeductionRecord`] a caller supplies with
//! amounts already paid, and the [`ReconciliationResult`] produced by
//! subtracting them from a calculation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::SeveranceComponent;

/// Amounts already paid against each component.
///
/// Figures are taken at face value. Missing fields deserialize as zero.
///
/// # Example
///
/// ```
/// use severance_engine::models::{DeductionRecord, SeveranceComponent};
/// use rust_decimal::Decimal;
///
/// let deductions: DeductionRecord = serde_json::from_str(r#"{"primas": "250000"}"#).unwrap();
/// assert_eq!(deductions.amount(SeveranceComponent::Primas), Decimal::new(250_000, 0));
/// assert_eq!(deductions.total(), Decimal::new(250_000, 0));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionRecord {
    /// Bonus amounts already paid.
    #[serde(default)]
    pub primas: Decimal,
    /// Severance fund amounts already paid.
    #[serde(default)]
    pub cesantias: Decimal,
    /// Severance interest already paid.
    #[serde(default)]
    pub intereses: Decimal,
    /// Vacation pay already paid.
    #[serde(default)]
    pub vacaciones: Decimal,
}

impl DeductionRecord {
    /// Returns the deduction recorded for a component.
    pub fn amount(&self, component: SeveranceComponent) -> Decimal {
        match component {
            SeveranceComponent::Primas => self.primas,
            SeveranceComponent::Cesantias => self.cesantias,
            SeveranceComponent::Intereses => self.intereses,
            SeveranceComponent::Vacaciones => self.vacaciones,
        }
    }

    /// Returns the sum of all four deductions, or `None` if it overflows.
    pub fn checked_total(&self) -> Option<Decimal> {
        SeveranceComponent::ALL
            .iter()
            .try_fold(Decimal::ZERO, |sum, c| sum.checked_add(self.amount(*c)))
    }

    /// Returns the sum of all four deductions, saturating at the bounds of
    /// [`Decimal`].
    pub fn total(&self) -> Decimal {
        SeveranceComponent::ALL
            .iter()
            .fold(Decimal::ZERO, |sum, c| sum.saturating_add(self.amount(*c)))
    }
}

/// Calculated, paid and remaining figures for one component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentBalance {
    /// Which component this balance describes.
    pub component: SeveranceComponent,
    /// The amount the engine calculated.
    pub calculated: Decimal,
    /// The amount the caller reported as already paid.
    pub paid: Decimal,
    /// `calculated - paid`; negative when over-paid.
    pub remaining: Decimal,
}

impl ComponentBalance {
    /// Returns true when more was paid than was calculated.
    pub fn is_overpaid(&self) -> bool {
        self.paid > self.calculated
    }
}

/// The outcome of reconciling a calculation against deductions.
///
/// Warnings are advisory; a result is always produced, even when some
/// remaining balances are negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconciliationResult {
    /// Bonus balance.
    pub primas: ComponentBalance,
    /// Severance fund balance.
    pub cesantias: ComponentBalance,
    /// Severance interest balance.
    pub intereses: ComponentBalance,
    /// Vacation balance.
    pub vacaciones: ComponentBalance,
    /// The engine's rounded total.
    pub total_calculated: Decimal,
    /// Sum of all deductions.
    pub total_deductions: Decimal,
    /// `total_calculated - total_deductions`.
    pub total_remaining: Decimal,
    /// One message per over-paid component.
    pub warnings: Vec<String>,
}

impl ReconciliationResult {
    /// Returns the balance for a component.
    pub fn balance(&self, component: SeveranceComponent) -> &ComponentBalance {
        match component {
            SeveranceComponent::Primas => &self.primas,
            SeveranceComponent::Cesantias => &self.cesantias,
            SeveranceComponent::Intereses => &self.intereses,
            SeveranceComponent::Vacaciones => &self.vacaciones,
        }
    }

    /// Returns true when any warnings were raised.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default_to_zero() {
        let record: DeductionRecord = serde_json::from_str("{}").unwrap();
        assert_eq!(record, DeductionRecord::default());
        assert_eq!(record.total(), Decimal::ZERO);
    }

    #[test]
    fn test_accepts_numeric_and_string_amounts() {
        let record: DeductionRecord =
            serde_json::from_str(r#"{"cesantias": 1000, "vacaciones": "500.50"}"#).unwrap();

        assert_eq!(record.cesantias, Decimal::new(1000, 0));
        assert_eq!(record.vacaciones, Decimal::new(50050, 2));
        assert_eq!(record.total(), Decimal::new(150050, 2));
    }

    #[test]
    fn test_total_saturates_on_overflow() {
        let record = DeductionRecord {
            primas: Decimal::MAX,
            cesantias: Decimal::MAX,
            ..Default::default()
        };

        assert_eq!(record.checked_total(), None);
        assert_eq!(record.total(), Decimal::MAX);
    }

    #[test]
    fn test_checked_total_within_range() {
        let record = DeductionRecord {
            primas: Decimal::new(100, 0),
            intereses: Decimal::new(-40, 0),
            ..Default::default()
        };
        assert_eq!(record.checked_total(), Some(Decimal::new(60, 0)));
    }

    #[test]
    fn test_overpaid_balance() {
        let balance = ComponentBalance {
            component: SeveranceComponent::Primas,
            calculated: Decimal::new(100, 0),
            paid: Decimal::new(150, 0),
            remaining: Decimal::new(-50, 0),
        };
        assert!(balance.is_overpaid());
    }
}
