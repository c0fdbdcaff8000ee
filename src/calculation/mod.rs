//! Calculation logic for the Severance Engine.
//!
//! This module contains the day-counting rule, the accrual formulas for
//! primas, cesantías, intereses sobre cesantías and vacaciones, the
//! currency rounding rule, the [`SeveranceEngine`] that ties them together
//! over a validated period, and the deduction reconciler.

mod accruals;
mod days_worked;
mod engine;
mod reconciler;
mod rounding;

pub use accruals::{
    SAVINGS_INTEREST_RATE, VACATION_DIVISOR, checked_total, interest_on_savings,
    prorated_bonus, prorated_vacation, severance_savings,
};
pub use days_worked::{COMMERCIAL_YEAR_DAYS, count_days_worked};
pub use engine::SeveranceEngine;
pub use reconciler::reconcile;
pub use rounding::round_currency;
