//! Day counting for severance accrual.
//!
//! Accruals use the commercial year of 360 days (12 months of 30). Days
//! beyond one commercial year do not increase any component.

use chrono::NaiveDate;

/// Days in a commercial year, and the cap on days counted towards accrual.
pub const COMMERCIAL_YEAR_DAYS: u32 = 360;

/// Counts the whole days between two dates, capped at one commercial year.
///
/// The count is `end_date - start_date` in whole days: the start date is
/// counted and the end date is not. Ranges where the end date is not after
/// the start date count as zero days; the engine rejects them before this
/// function is reached.
///
/// # Examples
///
/// ```
/// use severance_engine::calculation::count_days_worked;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
/// assert_eq!(count_days_worked(start, NaiveDate::from_ymd_opt(2023, 7, 1).unwrap()), 181);
/// assert_eq!(count_days_worked(start, NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()), 360);
/// ```
pub fn count_days_worked(start_date: NaiveDate, end_date: NaiveDate) -> u32 {
    let days = (end_date - start_date).num_days();
    days.clamp(0, i64::from(COMMERCIAL_YEAR_DAYS)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_single_day() {
        assert_eq!(count_days_worked(date("2023-01-01"), date("2023-01-02")), 1);
    }

    #[test]
    fn test_thirty_days() {
        assert_eq!(count_days_worked(date("2023-01-01"), date("2023-01-31")), 30);
    }

    #[test]
    fn test_half_year() {
        assert_eq!(count_days_worked(date("2023-01-01"), date("2023-06-30")), 180);
        assert_eq!(count_days_worked(date("2023-01-01"), date("2023-07-01")), 181);
    }

    #[test]
    fn test_just_below_cap() {
        assert_eq!(count_days_worked(date("2023-01-01"), date("2023-12-26")), 359);
    }

    #[test]
    fn test_exactly_at_cap() {
        assert_eq!(count_days_worked(date("2023-01-01"), date("2023-12-27")), 360);
    }

    #[test]
    fn test_beyond_cap_is_clamped() {
        assert_eq!(count_days_worked(date("2023-01-01"), date("2023-12-28")), 360);
        assert_eq!(count_days_worked(date("2023-01-01"), date("2024-05-15")), 360);
        assert_eq!(count_days_worked(date("2023-01-01"), date("2024-12-31")), 360);
    }

    #[test]
    fn test_leap_day_counts_as_a_day() {
        assert_eq!(count_days_worked(date("2024-02-28"), date("2024-03-01")), 2);
    }

    #[test]
    fn test_reversed_range_counts_zero() {
        assert_eq!(count_days_worked(date("2023-06-01"), date("2023-01-01")), 0);
    }
}
