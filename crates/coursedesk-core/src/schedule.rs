//! # Schedule
//!
//! Day counts for training date ranges. Both ends of a range are billable,
//! so a training that starts and ends on the same date lasts one day.

use chrono::NaiveDate;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::validation::out_of_range;

/// Number of calendar days from `start` to `end`, both inclusive.
///
/// ```rust
/// use chrono::NaiveDate;
/// use coursedesk_core::schedule::inclusive_days;
///
/// let start = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
/// let end = NaiveDate::from_ymd_opt(2024, 3, 8).unwrap();
/// assert_eq!(inclusive_days(start, end).unwrap(), 5);
/// ```
pub fn inclusive_days(start: NaiveDate, end: NaiveDate) -> CoreResult<i64> {
    if end < start {
        return Err(CoreError::InvalidDateRange { start, end });
    }
    Ok((end - start).num_days() + 1)
}

/// Amount owed to a trainer for the whole range at `daily_rate`.
///
/// Fails when the range is reversed or the total exceeds `Money::MAX`.
pub fn po_total(start: NaiveDate, end: NaiveDate, daily_rate: Money) -> CoreResult<Money> {
    let days = inclusive_days(start, end)?;
    Ok(daily_rate
        .checked_mul_quantity(days)
        .ok_or_else(|| out_of_range("totalAmount"))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_same_day_is_one_day() {
        assert_eq!(inclusive_days(date(2024, 1, 1), date(2024, 1, 1)).unwrap(), 1);
    }

    #[test]
    fn test_range_crosses_month_and_leap_day() {
        assert_eq!(inclusive_days(date(2024, 2, 28), date(2024, 3, 1)).unwrap(), 3);
        assert_eq!(inclusive_days(date(2023, 12, 30), date(2024, 1, 2)).unwrap(), 4);
    }

    #[test]
    fn test_reversed_range_is_error() {
        let err = inclusive_days(date(2024, 3, 10), date(2024, 3, 9)).unwrap_err();
        assert!(matches!(err, CoreError::InvalidDateRange { .. }));
    }

    #[test]
    fn test_po_total() {
        let total =
            po_total(date(2024, 5, 6), date(2024, 5, 8), Money::from_rupees(8_000)).unwrap();
        assert_eq!(total, Money::from_rupees(24_000));

        assert!(po_total(date(2024, 5, 8), date(2024, 5, 6), Money::from_rupees(1)).is_err());
    }

    #[test]
    fn test_po_total_beyond_max_is_error() {
        let err = po_total(date(2024, 5, 6), date(2024, 5, 7), Money::MAX).unwrap_err();
        assert!(matches!(err, CoreError::Validation(ValidationError::OutOfRange { .. })));

        let total = po_total(date(2024, 5, 6), date(2024, 5, 6), Money::MAX).unwrap();
        assert_eq!(total, Money::MAX);
    }
}
