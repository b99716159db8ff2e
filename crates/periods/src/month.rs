//! Calendar month.

use std::fmt;
use std::str::FromStr;

use crate::civil::{days_in_month, validate_month};
use crate::error::PeriodError;
use crate::granularity::Granularity;
use crate::period::{TimePeriod, impl_text_serde, sealed};
use crate::quarter::Quarter;
use crate::text::Scanner;

/// A calendar month.
///
/// Canonical text form: `YYYY-MM`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month {
    ordinal: i32,
}

impl Month {
    /// Creates a new `Month` from a year and a month number (1..=12).
    ///
    /// # Errors
    ///
    /// Returns [`PeriodError::InvalidComponents`] if `month` is not 1..=12,
    /// and [`PeriodError::OutOfRange`] if the month is outside the supported
    /// range.
    pub fn new(year: i32, month: u8) -> Result<Self, PeriodError> {
        validate_month(month)?;
        let ordinal = (i64::from(year) - 1) * 12 + i64::from(month) - 1;
        let ordinal = Granularity::Month.check_ordinal(ordinal)?;
        Ok(Self { ordinal })
    }

    pub fn january(year: i32) -> Result<Self, PeriodError> {
        Self::new(year, 1)
    }

    pub fn february(year: i32) -> Result<Self, PeriodError> {
        Self::new(year, 2)
    }

    pub fn march(year: i32) -> Result<Self, PeriodError> {
        Self::new(year, 3)
    }

    pub fn april(year: i32) -> Result<Self, PeriodError> {
        Self::new(year, 4)
    }

    pub fn may(year: i32) -> Result<Self, PeriodError> {
        Self::new(year, 5)
    }

    pub fn june(year: i32) -> Result<Self, PeriodError> {
        Self::new(year, 6)
    }

    pub fn july(year: i32) -> Result<Self, PeriodError> {
        Self::new(year, 7)
    }

    pub fn august(year: i32) -> Result<Self, PeriodError> {
        Self::new(year, 8)
    }

    pub fn september(year: i32) -> Result<Self, PeriodError> {
        Self::new(year, 9)
    }

    pub fn october(year: i32) -> Result<Self, PeriodError> {
        Self::new(year, 10)
    }

    pub fn november(year: i32) -> Result<Self, PeriodError> {
        Self::new(year, 11)
    }

    pub fn december(year: i32) -> Result<Self, PeriodError> {
        Self::new(year, 12)
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.ordinal.div_euclid(12) + 1
    }

    /// Returns the month number (1..=12).
    pub fn month(self) -> u8 {
        (self.ordinal.rem_euclid(12) + 1) as u8
    }

    /// Number of days in this month, accounting for leap years.
    pub fn days_in_month(self) -> u8 {
        days_in_month(self.year(), self.month())
    }

    /// The quarter this month belongs to.
    pub fn quarter(self) -> Quarter {
        self.to_coarser()
    }
}

impl sealed::Sealed for Month {
    fn from_ordinal_unchecked(ordinal: i32) -> Self {
        Self { ordinal }
    }
}

impl TimePeriod for Month {
    const GRANULARITY: Granularity = Granularity::Month;

    fn ordinal(&self) -> i32 {
        self.ordinal
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

impl fmt::Debug for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Month({self})")
    }
}

impl FromStr for Month {
    type Err = PeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut scan = Scanner::new(s, Granularity::Month);
        let year = scan.number(4, "year")? as i32;
        scan.literal(b'-')?;
        let month = scan.number(2, "month")? as u8;
        scan.finish()?;
        Month::new(year, month).map_err(|e| scan.reject(e))
    }
}

impl_text_serde!(Month);
