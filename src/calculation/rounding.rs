//! Currency rounding.
//!
//! Every rounded figure in the engine goes through [`round_currency`], so
//! the midpoint rule is fixed in one place instead of depending on a
//! platform default.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds to whole currency units, with .5 rounded away from zero.
///
/// # Examples
///
/// ```
/// use severance_engine::calculation::round_currency;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_currency(Decimal::from_str("2299843.5").unwrap()), Decimal::from(2299844));
/// assert_eq!(round_currency(Decimal::from_str("30334.26").unwrap()), Decimal::from(30334));
/// ```
pub fn round_currency(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}
