//! Proleptic Gregorian calendar arithmetic.
//!
//! Days are counted from 0001-01-01 (day 0). Sub-day positions are counted in
//! half-hour "ticks", the finest granularity in the crate, so that every
//! period can be located on a single axis.

use chrono::Weekday;

use crate::error::ComponentError;

/// Half-hour ticks per hour.
pub(crate) const TICKS_PER_HOUR: i64 = 2;

/// Half-hour ticks per day.
pub(crate) const TICKS_PER_DAY: i64 = 24 * TICKS_PER_HOUR;

/// Number of days in each month of a common year (index 0 unused, index 1 = January).
const DAYS_PER_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Days from 0000-03-01 to 0001-01-01.
const EPOCH_SHIFT: i64 = 306;

/// Days in a 400-year Gregorian cycle.
const DAYS_PER_ERA: i64 = 146_097;

/// Returns whether `year` is a leap year in the proleptic Gregorian calendar.
pub(crate) fn is_leap_year(year: i32) -> bool {
    year.rem_euclid(4) == 0 && (year.rem_euclid(100) != 0 || year.rem_euclid(400) == 0)
}

/// Returns the number of days in `month` of `year`.
///
/// `month` must already be validated to 1..=12.
pub(crate) fn days_in_month(year: i32, month: u8) -> u8 {
    if month == 2 && is_leap_year(year) {
        29
    } else {
        DAYS_PER_MONTH[month as usize]
    }
}

/// Checks that `month` is 1..=12.
pub(crate) fn validate_month(month: u8) -> Result<(), ComponentError> {
    if !(1..=12).contains(&month) {
        return Err(ComponentError::InvalidMonth { month });
    }
    Ok(())
}

/// Checks that `(year, month, day)` names a real calendar date.
pub(crate) fn validate_date(year: i32, month: u8, day: u8) -> Result<(), ComponentError> {
    validate_month(month)?;
    let max_day = days_in_month(year, month);
    if !(1..=max_day).contains(&day) {
        return Err(ComponentError::InvalidDay {
            year,
            month,
            day,
            max_day,
        });
    }
    Ok(())
}

/// Converts a validated civil date into days since 0001-01-01.
///
/// Years are shifted so that they start on March 1, which puts the leap day
/// at the end of the shifted year and makes month lengths a linear function.
pub(crate) fn days_from_civil(year: i32, month: u8, day: u8) -> i64 {
    let y = i64::from(year) - i64::from(month <= 2);
    let era = y.div_euclid(400);
    let yoe = y - era * 400;
    let mp = (i64::from(month) + 9) % 12;
    let doy = (153 * mp + 2) / 5 + i64::from(day) - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * DAYS_PER_ERA + doe - EPOCH_SHIFT
}

/// Converts days since 0001-01-01 back into `(year, month, day)`.
pub(crate) fn civil_from_days(days: i64) -> (i32, u8, u8) {
    let z = days + EPOCH_SHIFT;
    let era = z.div_euclid(DAYS_PER_ERA);
    let doe = z - era * DAYS_PER_ERA;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400 + i64::from(month <= 2);
    // Callers only pass day counts inside the supported domain.
    (year as i32, month as u8, day as u8)
}

/// Day of the week for days since 0001-01-01 (which was a Monday).
pub(crate) fn weekday_from_days(days: i64) -> Weekday {
    match days.rem_euclid(7) {
        0 => Weekday::Mon,
        1 => Weekday::Tue,
        2 => Weekday::Wed,
        3 => Weekday::Thu,
        4 => Weekday::Fri,
        5 => Weekday::Sat,
        _ => Weekday::Sun,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_years() {
        assert!(is_leap_year(2020));
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2019));
        assert!(is_leap_year(0));
    }

    #[test]
    fn month_lengths() {
        assert_eq!(days_in_month(2019, 2), 28);
        assert_eq!(days_in_month(2020, 2), 29);
        assert_eq!(days_in_month(2019, 4), 30);
        assert_eq!(days_in_month(2019, 12), 31);
    }

    #[test]
    fn validate_rejects_bad_month() {
        assert_eq!(
            validate_date(2019, 13, 1).unwrap_err(),
            ComponentError::InvalidMonth { month: 13 }
        );
        assert_eq!(
            validate_date(2019, 0, 1).unwrap_err(),
            ComponentError::InvalidMonth { month: 0 }
        );
    }

    #[test]
    fn validate_rejects_bad_day() {
        assert_eq!(
            validate_date(2019, 2, 29).unwrap_err(),
            ComponentError::InvalidDay {
                year: 2019,
                month: 2,
                day: 29,
                max_day: 28,
            }
        );
        assert!(validate_date(2020, 2, 29).is_ok());
        assert!(validate_date(2019, 1, 0).is_err());
    }

    #[test]
    fn epoch_is_day_zero() {
        assert_eq!(days_from_civil(1, 1, 1), 0);
        assert_eq!(civil_from_days(0), (1, 1, 1));
    }

    #[test]
    fn march_first_of_year_one() {
        assert_eq!(days_from_civil(1, 3, 1), 59);
    }

    #[test]
    fn known_day_counts() {
        // 1970-01-01 is 719_162 days after 0001-01-01.
        assert_eq!(days_from_civil(1970, 1, 1), 719_162);
        assert_eq!(days_from_civil(2000, 3, 1) - days_from_civil(2000, 2, 28), 2);
        assert_eq!(days_from_civil(2001, 1, 1) - days_from_civil(2000, 1, 1), 366);
    }

    #[test]
    fn civil_roundtrip_across_leap_cycles() {
        let start = days_from_civil(1895, 1, 1);
        let end = days_from_civil(2105, 12, 31);
        let mut expected = (1895, 1, 1);
        for days in start..=end {
            let (y, m, d) = civil_from_days(days);
            assert_eq!((y, m, d), expected, "mismatch at day {days}");
            assert_eq!(days_from_civil(y, m, d), days);
            expected = if d < days_in_month(y, m) {
                (y, m, d + 1)
            } else if m < 12 {
                (y, m + 1, 1)
            } else {
                (y + 1, 1, 1)
            };
        }
    }

    #[test]
    fn weekdays() {
        assert_eq!(weekday_from_days(0), Weekday::Mon);
        assert_eq!(weekday_from_days(days_from_civil(2019, 8, 30)), Weekday::Fri);
        assert_eq!(weekday_from_days(days_from_civil(2019, 9, 1)), Weekday::Sun);
        assert_eq!(weekday_from_days(days_from_civil(2000, 1, 1)), Weekday::Sat);
    }
}
