//! Reconciliation of calculated severance against amounts already paid.
//!
//! Deductions are subtracted at face value. A deduction larger than the
//! calculated component raises a warning but never blocks the result;
//! negative remaining balances are returned as-is. Figures that would leave
//! the range of `Decimal` saturate at its bounds and add a warning.

use tracing::warn;

use crate::models::{ComponentBalance, DeductionRecord, ReconciliationResult, SeveranceComponent};

use super::engine::SeveranceEngine;

const SATURATION_WARNING: &str =
    "Deductions exceed the representable range; affected figures are saturated";

/// Subtracts `deductions` from the amounts calculated by `engine`.
///
/// # Example
///
/// ```
/// use severance_engine::calculation::{SeveranceEngine, reconcile};
/// use severance_engine::config::EngineConfig;
/// use severance_engine::models::DeductionRecord;
/// use rust_decimal::Decimal;
///
/// let engine = SeveranceEngine::from_iso(
///     Decimal::from(1_000_000),
///     "2023-01-01",
///     "2023-12-27",
///     &EngineConfig::default(),
/// )?;
/// let deductions = DeductionRecord {
///     primas: Decimal::from(1_200_000),
///     ..Default::default()
/// };
///
/// let result = reconcile(&engine, &deductions);
/// assert_eq!(result.primas.remaining, Decimal::from(-200_000));
/// assert_eq!(result.total_remaining, Decimal::from(1_420_000));
/// assert_eq!(result.warnings.len(), 1);
/// # Ok::<(), severance_engine::error::EngineError>(())
/// ```
pub fn reconcile(engine: &SeveranceEngine, deductions: &DeductionRecord) -> ReconciliationResult {
    let calculated = engine.result();

    let mut warnings = Vec::new();
    let mut saturated = false;
    let mut balance_for = |component: SeveranceComponent| -> ComponentBalance {
        let calculated = calculated.component(component);
        let paid = deductions.amount(component);
        let remaining = calculated.checked_sub(paid).unwrap_or_else(|| {
            saturated = true;
            calculated.saturating_sub(paid)
        });
        let balance = ComponentBalance {
            component,
            calculated,
            paid,
            remaining,
        };

        if balance.is_overpaid() {
            let message = overpayment_warning(&balance);
            warn!(
                component = %component,
                calculated = %balance.calculated,
                paid = %balance.paid,
                "Deduction exceeds calculated amount"
            );
            warnings.push(message);
        }

        balance
    };

    let primas = balance_for(SeveranceComponent::Primas);
    let cesantias = balance_for(SeveranceComponent::Cesantias);
    let intereses = balance_for(SeveranceComponent::Intereses);
    let vacaciones = balance_for(SeveranceComponent::Vacaciones);

    let total_deductions = deductions.checked_total().unwrap_or_else(|| {
        saturated = true;
        deductions.total()
    });
    let total_remaining = calculated
        .total
        .checked_sub(total_deductions)
        .unwrap_or_else(|| {
            saturated = true;
            calculated.total.saturating_sub(total_deductions)
        });

    if saturated {
        warn!(
            total_deductions = %total_deductions,
            "Deductions exceed the representable range"
        );
        warnings.push(SATURATION_WARNING.to_string());
    }

    ReconciliationResult {
        primas,
        cesantias,
        intereses,
        vacaciones,
        total_calculated: calculated.total,
        total_deductions,
        total_remaining,
        warnings,
    }
}

fn overpayment_warning(balance: &ComponentBalance) -> String {
    format!(
        "{}: deduction of ${} exceeds calculated amount of ${}",
        balance.component,
        balance.paid.normalize(),
        balance.calculated.round_dp(2).normalize()
    )
}
