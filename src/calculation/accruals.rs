//! Accrual formulas for the four severance components.
//!
//! All formulas prorate over the 360-day commercial year:
//!
//! | Component   | Formula                                  |
//! |-------------|------------------------------------------|
//! | Primas      | `salary * days / 360`                    |
//! | Cesantías   | same as primas                           |
//! | Intereses   | `round(cesantias * days * 0.12 / 360)`   |
//! | Vacaciones  | `salary * days / 720`                    |

use rust_decimal::Decimal;

use super::days_worked::COMMERCIAL_YEAR_DAYS;
use super::rounding::round_currency;

/// Annual nominal interest rate owed on the severance fund (12%).
pub const SAVINGS_INTEREST_RATE: Decimal = Decimal::from_parts(12, 0, 0, false, 2);

/// Divisor for vacation accrual: 15 days per 360, i.e. half the bonus rate.
pub const VACATION_DIVISOR: u32 = 720;

/// Prorated bonus accrual ("primas").
///
/// # Examples
///
/// ```
/// use severance_engine::calculation::prorated_bonus;
/// use rust_decimal::Decimal;
///
/// assert_eq!(prorated_bonus(Decimal::from(1_000_000), 360), Decimal::from(1_000_000));
/// assert_eq!(prorated_bonus(Decimal::from(1_000_000), 180), Decimal::from(500_000));
/// ```
pub fn prorated_bonus(salary: Decimal, days_worked: u32) -> Decimal {
    salary * Decimal::from(days_worked) / Decimal::from(COMMERCIAL_YEAR_DAYS)
}

/// Severance fund accrual ("cesantías").
///
/// Accrues at the same rate as the bonus.
pub fn severance_savings(salary: Decimal, days_worked: u32) -> Decimal {
    prorated_bonus(salary, days_worked)
}

/// Interest owed on the severance fund, rounded to whole currency units.
///
/// # Examples
///
/// ```
/// use severance_engine::calculation::interest_on_savings;
/// use rust_decimal::Decimal;
///
/// assert_eq!(interest_on_savings(Decimal::from(877_803), 360), Decimal::from(105_336));
/// ```
pub fn interest_on_savings(savings: Decimal, days_worked: u32) -> Decimal {
    round_currency(
        savings * Decimal::from(days_worked) * SAVINGS_INTEREST_RATE
            / Decimal::from(COMMERCIAL_YEAR_DAYS),
    )
}

/// Accrued vacation pay ("vacaciones").
pub fn prorated_vacation(salary: Decimal, days_worked: u32) -> Decimal {
    salary * Decimal::from(days_worked) / Decimal::from(VACATION_DIVISOR)
}

/// Computes the rounded total with checked arithmetic.
///
/// Performs the same operations as the individual formulas, in the same
/// order, and returns `None` if any step leaves the range of [`Decimal`].
///
/// # Examples
///
/// ```
/// use severance_engine::calculation::checked_total;
/// use rust_decimal::Decimal;
///
/// assert_eq!(checked_total(Decimal::from(1_000_000), 360), Some(Decimal::from(2_620_000)));
/// assert_eq!(checked_total(Decimal::MAX, 360), None);
/// ```
pub fn checked_total(salary: Decimal, days_worked: u32) -> Option<Decimal> {
    let days = Decimal::from(days_worked);
    let year = Decimal::from(COMMERCIAL_YEAR_DAYS);

    let bonuses = salary.checked_mul(days)?.checked_div(year)?;
    let interest = bonuses
        .checked_mul(days)?
        .checked_mul(SAVINGS_INTEREST_RATE)?
        .checked_div(year)?;
    let vacation = salary
        .checked_mul(days)?
        .checked_div(Decimal::from(VACATION_DIVISOR))?;

    let sum = bonuses
        .checked_add(bonuses)?
        .checked_add(round_currency(interest))?
        .checked_add(vacation)?;
    Some(round_currency(sum))
}
