//! Calendar day.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, Weekday};

use crate::civil::{civil_from_days, days_from_civil, validate_date, weekday_from_days};
use crate::error::PeriodError;
use crate::granularity::Granularity;
use crate::period::{TimePeriod, impl_text_serde, sealed};
use crate::sequence::{Weekdays, enumerate_weekdays};
use crate::text::Scanner;

/// A calendar day in the proleptic Gregorian calendar.
///
/// Canonical text form: `YYYY-MM-DD`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Day {
    ordinal: i32,
}

impl Day {
    /// Creates a new `Day` from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns [`PeriodError::InvalidComponents`] if the month or day is not
    /// valid, and [`PeriodError::OutOfRange`] if the date is outside the
    /// supported range.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, PeriodError> {
        validate_date(year, month, day)?;
        let ordinal = Granularity::Day.check_ordinal(days_from_civil(year, month, day))?;
        Ok(Self { ordinal })
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.civil().0
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.civil().1
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u8 {
        self.civil().2
    }

    /// Returns the day of the week.
    pub fn weekday(self) -> Weekday {
        weekday_from_days(i64::from(self.ordinal))
    }

    /// Returns whether this day is Monday to Friday.
    pub fn is_weekday(self) -> bool {
        !matches!(self.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// Every weekday from `self` to `end` inclusive.
    pub fn enumerate_weekdays(self, end: Day) -> Weekdays {
        enumerate_weekdays(self, end)
    }

    /// Returns this day as a [`NaiveDate`].
    pub fn to_naive_date(self) -> NaiveDate {
        self.start().date()
    }

    fn civil(self) -> (i32, u8, u8) {
        civil_from_days(i64::from(self.ordinal))
    }
}

impl sealed::Sealed for Day {
    fn from_ordinal_unchecked(ordinal: i32) -> Self {
        Self { ordinal }
    }
}

impl TimePeriod for Day {
    const GRANULARITY: Granularity = Granularity::Day;

    fn ordinal(&self) -> i32 {
        self.ordinal
    }
}

impl TryFrom<NaiveDate> for Day {
    type Error = PeriodError;

    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        Day::new(date.year(), date.month() as u8, date.day() as u8)
    }
}

impl From<Day> for NaiveDate {
    fn from(day: Day) -> Self {
        day.to_naive_date()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (year, month, day) = self.civil();
        write!(f, "{year:04}-{month:02}-{day:02}")
    }
}

impl fmt::Debug for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Day({self})")
    }
}

impl FromStr for Day {
    type Err = PeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut scan = Scanner::new(s, Granularity::Day);
        let year = scan.number(4, "year")? as i32;
        scan.literal(b'-')?;
        let month = scan.number(2, "month")? as u8;
        scan.literal(b'-')?;
        let day = scan.number(2, "day")? as u8;
        scan.finish()?;
        Day::new(year, month, day).map_err(|e| scan.reject(e))
    }
}

impl_text_serde!(Day);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ComponentError;

    #[test]
    fn new_valid() {
        let day = Day::new(2019, 8, 30).unwrap();
        assert_eq!(day.year(), 2019);
        assert_eq!(day.month(), 8);
        assert_eq!(day.day(), 30);
    }

    #[test]
    fn new_invalid_month() {
        assert_eq!(
            Day::new(2019, 13, 1).unwrap_err(),
            PeriodError::InvalidComponents(ComponentError::InvalidMonth { month: 13 })
        );
    }

    #[test]
    fn new_invalid_day() {
        assert_eq!(
            Day::new(2019, 2, 30).unwrap_err(),
            PeriodError::InvalidComponents(ComponentError::InvalidDay {
                year: 2019,
                month: 2,
                day: 30,
                max_day: 28,
            })
        );
    }

    #[test]
    fn leap_day() {
        assert!(Day::new(2020, 2, 29).is_ok());
        assert!(Day::new(1900, 2, 29).is_err());
        assert!(Day::new(2000, 2, 29).is_ok());
    }

    #[test]
    fn new_out_of_range() {
        assert!(matches!(
            Day::new(0, 12, 31).unwrap_err(),
            PeriodError::OutOfRange { .. }
        ));
        assert!(matches!(
            Day::new(9999, 1, 1).unwrap_err(),
            PeriodError::OutOfRange { .. }
        ));
    }

    #[test]
    fn components_checked_before_range() {
        assert!(matches!(
            Day::new(9999, 2, 30).unwrap_err(),
            PeriodError::InvalidComponents(_)
        ));
    }

    #[test]
    fn min_and_max() {
        assert_eq!(Day::min_period(), Day::new(1, 1, 1).unwrap());
        assert_eq!(Day::max_period(), Day::new(9998, 12, 31).unwrap());
    }

    #[test]
    fn weekday() {
        assert_eq!(Day::new(2019, 8, 30).unwrap().weekday(), Weekday::Fri);
        assert!(Day::new(2019, 8, 30).unwrap().is_weekday());
        assert!(!Day::new(2019, 8, 31).unwrap().is_weekday());
        assert!(!Day::new(2019, 9, 1).unwrap().is_weekday());
    }

    #[test]
    fn offset_across_month_and_year() {
        let day = Day::new(2019, 12, 31).unwrap();
        assert_eq!(day.next().unwrap(), Day::new(2020, 1, 1).unwrap());
        let day = Day::new(2020, 2, 28).unwrap();
        assert_eq!(day.offset(2).unwrap(), Day::new(2020, 3, 1).unwrap());
        assert_eq!(day.offset(-59).unwrap(), Day::new(2019, 12, 31).unwrap());
    }

    #[test]
    fn naive_date_interop() {
        let date = NaiveDate::from_ymd_opt(2020, 12, 25).unwrap();
        let christmas = Day::try_from(date).unwrap();
        assert_eq!(christmas.to_string(), "2020-12-25");
        assert_eq!(NaiveDate::from(christmas), date);
    }

    #[test]
    fn format_pads() {
        assert_eq!(Day::new(1, 1, 1).unwrap().to_string(), "0001-01-01");
        assert_eq!(format!("{:?}", Day::new(2019, 8, 30).unwrap()), "Day(2019-08-30)");
    }

    #[test]
    fn parse_valid() {
        assert_eq!("2019-08-30".parse::<Day>().unwrap(), Day::new(2019, 8, 30).unwrap());
    }

    #[test]
    fn parse_rejects() {
        for text in ["2019-8-30", "2019-08-30 ", "2019/08/30", "2019-02-30", "0000-01-01", ""] {
            let err = text.parse::<Day>().unwrap_err();
            assert!(matches!(err, PeriodError::Parse { .. }), "{text:?}: {err}");
        }
    }

    #[test]
    fn serde_as_text() {
        let day = Day::new(2019, 8, 30).unwrap();
        let json = serde_json::to_string(&day).unwrap();
        assert_eq!(json, "\"2019-08-30\"");
        let back: Day = serde_json::from_str(&json).unwrap();
        assert_eq!(back, day);
        assert!(serde_json::from_str::<Day>("\"2019-02-30\"").is_err());
    }
}
