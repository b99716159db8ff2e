//! Calendar quarter.

use std::fmt;
use std::str::FromStr;

use crate::error::{ComponentError, PeriodError};
use crate::granularity::Granularity;
use crate::period::{TimePeriod, impl_text_serde, sealed};
use crate::text::Scanner;

/// A calendar quarter: Q1 is January to March, Q4 is October to December.
///
/// Canonical text form: `YYYY-Q#`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Quarter {
    ordinal: i32,
}

impl Quarter {
    /// Creates a new `Quarter` from a year and a quarter number (1..=4).
    ///
    /// # Errors
    ///
    /// Returns [`PeriodError::InvalidComponents`] if `quarter` is not 1..=4,
    /// and [`PeriodError::OutOfRange`] if the quarter is outside the
    /// supported range.
    pub fn new(year: i32, quarter: u8) -> Result<Self, PeriodError> {
        if !(1..=4).contains(&quarter) {
            return Err(ComponentError::InvalidQuarter { quarter }.into());
        }
        let ordinal = (i64::from(year) - 1) * 4 + i64::from(quarter) - 1;
        let ordinal = Granularity::Quarter.check_ordinal(ordinal)?;
        Ok(Self { ordinal })
    }

    pub fn q1(year: i32) -> Result<Self, PeriodError> {
        Self::new(year, 1)
    }

    pub fn q2(year: i32) -> Result<Self, PeriodError> {
        Self::new(year, 2)
    }

    pub fn q3(year: i32) -> Result<Self, PeriodError> {
        Self::new(year, 3)
    }

    pub fn q4(year: i32) -> Result<Self, PeriodError> {
        Self::new(year, 4)
    }

    pub fn year(self) -> i32 {
        self.ordinal.div_euclid(4) + 1
    }

    /// Quarter number within the year (1..=4).
    pub fn quarter(self) -> u8 {
        (self.ordinal.rem_euclid(4) + 1) as u8
    }
}

impl sealed::Sealed for Quarter {
    fn from_ordinal_unchecked(ordinal: i32) -> Self {
        Self { ordinal }
    }
}

impl TimePeriod for Quarter {
    const GRANULARITY: Granularity = Granularity::Quarter;

    fn ordinal(&self) -> i32 {
        self.ordinal
    }
}

impl fmt::Display for Quarter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-Q{}", self.year(), self.quarter())
    }
}

impl fmt::Debug for Quarter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Quarter({self})")
    }
}

impl FromStr for Quarter {
    type Err = PeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut scan = Scanner::new(s, Granularity::Quarter);
        let year = scan.number(4, "year")? as i32;
        scan.literal(b'-')?;
        scan.literal(b'Q')?;
        let quarter = scan.number(1, "quarter")? as u8;
        scan.finish()?;
        Quarter::new(year, quarter).map_err(|e| scan.reject(e))
    }
}

impl_text_serde!(Quarter);
