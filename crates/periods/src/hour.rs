//! Clock hours and half-hours.

use std::fmt;
use std::str::FromStr;

use crate::civil::{civil_from_days, days_from_civil, validate_date};
use crate::day::Day;
use crate::error::{ComponentError, PeriodError};
use crate::granularity::Granularity;
use crate::period::{TimePeriod, impl_text_serde, sealed};
use crate::text::Scanner;

/// One clock hour of a calendar day.
///
/// Canonical text form: `YYYY-MM-DD HH`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Hour {
    ordinal: i32,
}

/// One half of a clock hour: half 0 covers `:00`–`:30`, half 1 covers
/// `:30`–`:00`.
///
/// Canonical text form: `YYYY-MM-DD HH:M`, where `M` is the half index.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HalfHour {
    ordinal: i32,
}

fn validate_hour(hour: u8) -> Result<(), ComponentError> {
    if hour > 23 {
        return Err(ComponentError::InvalidHour { hour });
    }
    Ok(())
}

/// Ordinal of `hour` on the given date, before range checking.
fn hour_ordinal(year: i32, month: u8, day: u8, hour: u8) -> Result<i64, ComponentError> {
    validate_date(year, month, day)?;
    validate_hour(hour)?;
    Ok(days_from_civil(year, month, day) * 24 + i64::from(hour))
}

/// Splits an hour ordinal into `(year, month, day, hour)`.
fn hour_parts(ordinal: i32) -> (i32, u8, u8, u8) {
    let ordinal = i64::from(ordinal);
    let (year, month, day) = civil_from_days(ordinal.div_euclid(24));
    (year, month, day, ordinal.rem_euclid(24) as u8)
}

impl Hour {
    /// Creates a new `Hour` from a date and an hour of day (0..=23).
    ///
    /// # Errors
    ///
    /// Returns [`PeriodError::InvalidComponents`] if the date or hour is not
    /// valid, and [`PeriodError::OutOfRange`] if it falls outside the
    /// supported range.
    pub fn new(year: i32, month: u8, day: u8, hour: u8) -> Result<Self, PeriodError> {
        let ordinal = Granularity::Hour.check_ordinal(hour_ordinal(year, month, day, hour)?)?;
        Ok(Self { ordinal })
    }

    pub fn year(self) -> i32 {
        hour_parts(self.ordinal).0
    }

    pub fn month(self) -> u8 {
        hour_parts(self.ordinal).1
    }

    pub fn day(self) -> u8 {
        hour_parts(self.ordinal).2
    }

    /// Hour of day (0..=23).
    pub fn hour(self) -> u8 {
        hour_parts(self.ordinal).3
    }

    /// The day this hour belongs to.
    pub fn date(self) -> Day {
        self.to_coarser()
    }
}

impl HalfHour {
    /// Creates a new `HalfHour` from a date, an hour of day and a half index
    /// (0 for the first half of the hour, 1 for the second).
    ///
    /// # Errors
    ///
    /// Returns [`PeriodError::InvalidComponents`] if any component is not
    /// valid, and [`PeriodError::OutOfRange`] if the result falls outside the
    /// supported range.
    pub fn new(year: i32, month: u8, day: u8, hour: u8, half: u8) -> Result<Self, PeriodError> {
        let hour = hour_ordinal(year, month, day, hour)?;
        if half > 1 {
            return Err(ComponentError::InvalidHalfHour { half }.into());
        }
        let ordinal = Granularity::HalfHour.check_ordinal(hour * 2 + i64::from(half))?;
        Ok(Self { ordinal })
    }

    pub fn year(self) -> i32 {
        hour_parts(self.ordinal.div_euclid(2)).0
    }

    pub fn month(self) -> u8 {
        hour_parts(self.ordinal.div_euclid(2)).1
    }

    pub fn day(self) -> u8 {
        hour_parts(self.ordinal.div_euclid(2)).2
    }

    /// Hour of day (0..=23).
    pub fn hour(self) -> u8 {
        hour_parts(self.ordinal.div_euclid(2)).3
    }

    /// Half index within the hour (0 or 1).
    pub fn half(self) -> u8 {
        self.ordinal.rem_euclid(2) as u8
    }

    /// Minute at which this half-hour starts (0 or 30).
    pub fn minute(self) -> u8 {
        self.half() * 30
    }

    /// The day this half-hour belongs to.
    pub fn date(self) -> Day {
        self.to_coarser()
    }
}

impl sealed::Sealed for Hour {
    fn from_ordinal_unchecked(ordinal: i32) -> Self {
        Self { ordinal }
    }
}

impl TimePeriod for Hour {
    const GRANULARITY: Granularity = Granularity::Hour;

    fn ordinal(&self) -> i32 {
        self.ordinal
    }
}

impl sealed::Sealed for HalfHour {
    fn from_ordinal_unchecked(ordinal: i32) -> Self {
        Self { ordinal }
    }
}

impl TimePeriod for HalfHour {
    const GRANULARITY: Granularity = Granularity::HalfHour;

    fn ordinal(&self) -> i32 {
        self.ordinal
    }
}

impl fmt::Display for Hour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (year, month, day, hour) = hour_parts(self.ordinal);
        write!(f, "{year:04}-{month:02}-{day:02} {hour:02}")
    }
}

impl fmt::Debug for Hour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hour({self})")
    }
}

impl fmt::Display for HalfHour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (year, month, day, hour) = hour_parts(self.ordinal.div_euclid(2));
        let half = self.half();
        write!(f, "{year:04}-{month:02}-{day:02} {hour:02}:{half}")
    }
}

impl fmt::Debug for HalfHour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HalfHour({self})")
    }
}

/// Reads the `YYYY-MM-DD HH` prefix shared by both hour forms.
fn scan_hour(scan: &mut Scanner<'_>) -> Result<(i32, u8, u8, u8), PeriodError> {
    let year = scan.number(4, "year")? as i32;
    scan.literal(b'-')?;
    let month = scan.number(2, "month")? as u8;
    scan.literal(b'-')?;
    let day = scan.number(2, "day")? as u8;
    scan.literal(b' ')?;
    let hour = scan.number(2, "hour")? as u8;
    Ok((year, month, day, hour))
}

impl FromStr for Hour {
    type Err = PeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut scan = Scanner::new(s, Granularity::Hour);
        let (year, month, day, hour) = scan_hour(&mut scan)?;
        scan.finish()?;
        Hour::new(year, month, day, hour).map_err(|e| scan.reject(e))
    }
}

impl FromStr for HalfHour {
    type Err = PeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut scan = Scanner::new(s, Granularity::HalfHour);
        let (year, month, day, hour) = scan_hour(&mut scan)?;
        scan.literal(b':')?;
        let half = scan.number(1, "half-hour index")? as u8;
        scan.finish()?;
        HalfHour::new(year, month, day, hour, half).map_err(|e| scan.reject(e))
    }
}

impl_text_serde!(Hour);
impl_text_serde!(HalfHour);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hour_accessors() {
        let h = Hour::new(2019, 8, 30, 10).unwrap();
        assert_eq!((h.year(), h.month(), h.day(), h.hour()), (2019, 8, 30, 10));
        assert_eq!(h.date(), Day::new(2019, 8, 30).unwrap());
    }

    #[test]
    fn hour_offset() {
        let ten_am = Hour::new(2019, 8, 30, 10).unwrap();
        let midday = ten_am.offset(2).unwrap();
        assert_eq!(midday, Hour::new(2019, 8, 30, 12).unwrap());
        assert_eq!(midday.offset_from(&ten_am), 2);
        assert_eq!(ten_am.offset_from(&midday), -2);
    }

    #[test]
    fn hour_crosses_midnight() {
        let h = Hour::new(2019, 12, 31, 23).unwrap();
        assert_eq!(h.next().unwrap(), Hour::new(2020, 1, 1, 0).unwrap());
    }

    #[test]
    fn invalid_hour() {
        assert_eq!(
            Hour::new(2019, 8, 30, 25).unwrap_err(),
            PeriodError::InvalidComponents(ComponentError::InvalidHour { hour: 25 })
        );
        assert!(Hour::new(2019, 8, 30, 24).is_err());
    }

    #[test]
    fn half_hour_accessors() {
        let hh = HalfHour::new(2019, 8, 30, 22, 1).unwrap();
        assert_eq!(hh.hour(), 22);
        assert_eq!(hh.half(), 1);
        assert_eq!(hh.minute(), 30);
        assert_eq!(hh.date(), Day::new(2019, 8, 30).unwrap());
    }

    #[test]
    fn half_hour_increment_and_decrement() {
        let start = HalfHour::new(2019, 8, 30, 22, 0).unwrap();
        let up = start.next().unwrap().next().unwrap();
        assert_eq!(up.to_string(), "2019-08-30 23:0");
        let down = up.previous().unwrap().previous().unwrap().previous().unwrap();
        assert_eq!(down.to_string(), "2019-08-30 21:1");
    }

    #[test]
    fn invalid_half() {
        assert_eq!(
            HalfHour::new(2019, 8, 30, 22, 2).unwrap_err(),
            PeriodError::InvalidComponents(ComponentError::InvalidHalfHour { half: 2 })
        );
    }

    #[test]
    fn format_and_parse() {
        let h = Hour::new(2019, 8, 30, 10).unwrap();
        assert_eq!(h.to_string(), "2019-08-30 10");
        assert_eq!("2019-08-30 10".parse::<Hour>().unwrap(), h);
        let hh = HalfHour::new(2019, 8, 30, 22, 0).unwrap();
        assert_eq!(hh.to_string(), "2019-08-30 22:0");
        assert_eq!("2019-08-30 22:0".parse::<HalfHour>().unwrap(), hh);
    }

    #[test]
    fn parse_rejects() {
        assert!("2019-08-30 24".parse::<Hour>().is_err());
        assert!("2019-08-30T10".parse::<Hour>().is_err());
        assert!("2019-08-30 10:0".parse::<Hour>().is_err());
        assert!("2019-08-30 22:2".parse::<HalfHour>().is_err());
        assert!("2019-08-30 22:30".parse::<HalfHour>().is_err());
        assert!("2019-08-30 22".parse::<HalfHour>().is_err());
    }

    #[test]
    fn bounds() {
        assert_eq!(Hour::min_period().to_string(), "0001-01-01 00");
        assert_eq!(Hour::max_period().to_string(), "9998-12-31 23");
        assert_eq!(HalfHour::max_period().to_string(), "9998-12-31 23:1");
        assert!(matches!(
            HalfHour::max_period().next().unwrap_err(),
            PeriodError::OutOfRange { .. }
        ));
    }
}
