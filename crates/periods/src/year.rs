//! Calendar year.

use std::fmt;
use std::str::FromStr;

use crate::civil::is_leap_year;
use crate::error::PeriodError;
use crate::granularity::Granularity;
use crate::period::{TimePeriod, impl_text_serde, sealed};
use crate::text::Scanner;

/// A calendar year, January to December.
///
/// Canonical text form: `YYYY`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarYear {
    ordinal: i32,
}

impl CalendarYear {
    /// Creates a new `CalendarYear`.
    ///
    /// # Errors
    ///
    /// Returns [`PeriodError::OutOfRange`] if `year` is outside the
    /// supported range.
    pub fn new(year: i32) -> Result<Self, PeriodError> {
        let ordinal = Granularity::CalendarYear.check_ordinal(i64::from(year) - 1)?;
        Ok(Self { ordinal })
    }

    pub fn year(self) -> i32 {
        self.ordinal + 1
    }

    pub fn is_leap(self) -> bool {
        is_leap_year(self.year())
    }
}

impl sealed::Sealed for CalendarYear {
    fn from_ordinal_unchecked(ordinal: i32) -> Self {
        Self { ordinal }
    }
}

impl TimePeriod for CalendarYear {
    const GRANULARITY: Granularity = Granularity::CalendarYear;

    fn ordinal(&self) -> i32 {
        self.ordinal
    }
}

impl fmt::Display for CalendarYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.year())
    }
}

impl fmt::Debug for CalendarYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CalendarYear({self})")
    }
}

impl FromStr for CalendarYear {
    type Err = PeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut scan = Scanner::new(s, Granularity::CalendarYear);
        let year = scan.number(4, "year")? as i32;
        scan.finish()?;
        CalendarYear::new(year).map_err(|e| scan.reject(e))
    }
}

impl_text_serde!(CalendarYear);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_and_difference() {
        let cal19 = CalendarYear::new(2019).unwrap();
        let cal22 = cal19.offset(3).unwrap();
        assert_eq!(cal22.year(), 2022);
        assert_eq!(cal22.offset_from(&cal19), 3);
    }

    #[test]
    fn out_of_range() {
        assert_eq!(
            CalendarYear::new(0).unwrap_err(),
            PeriodError::OutOfRange {
                granularity: Granularity::CalendarYear,
                ordinal: -1,
            }
        );
        assert!(CalendarYear::new(9999).is_err());
        assert!(CalendarYear::new(i32::MIN).is_err());
    }

    #[test]
    fn max_period_cannot_advance() {
        let max = CalendarYear::max_period();
        assert_eq!(max.year(), 9998);
        assert!(matches!(max.next().unwrap_err(), PeriodError::OutOfRange { .. }));
        assert!(matches!(
            CalendarYear::min_period().previous().unwrap_err(),
            PeriodError::OutOfRange { .. }
        ));
    }

    #[test]
    fn leap() {
        assert!(CalendarYear::new(2020).unwrap().is_leap());
        assert!(!CalendarYear::new(2100).unwrap().is_leap());
    }

    #[test]
    fn format_and_parse() {
        assert_eq!(CalendarYear::new(19).unwrap().to_string(), "0019");
        assert_eq!("2019".parse::<CalendarYear>().unwrap().year(), 2019);
        assert!("0000".parse::<CalendarYear>().is_err());
        assert!("20190".parse::<CalendarYear>().is_err());
        assert!("9999".parse::<CalendarYear>().is_err());
    }
}
