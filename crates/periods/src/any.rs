//! Runtime-tagged periods.
//!
//! [`AnyPeriod`] carries one period of any granularity. Operations that the
//! typed API rejects at compile time (mixing granularities, converting to a
//! granularity that does not nest) are checked here at run time and fail with
//! [`PeriodError::IncompatibleGranularity`].

use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::PeriodError;
use crate::granularity::Granularity;
use crate::period::{TimePeriod, containing_tick, end_tick, start_tick};
use crate::sequence::{Weekdays, enumerate_weekdays};
use crate::{CalendarYear, Day, HalfHour, Hour, Month, Quarter};

/// A period of any granularity.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "granularity", content = "period", rename_all = "kebab-case")]
pub enum AnyPeriod {
    HalfHour(HalfHour),
    Hour(Hour),
    Day(Day),
    Month(Month),
    Quarter(Quarter),
    CalendarYear(CalendarYear),
}

/// Applies `$body` to the typed period inside `$any`, bound as `$p`.
macro_rules! dispatch {
    ($any:expr, $p:ident => $body:expr) => {
        match $any {
            AnyPeriod::HalfHour($p) => $body,
            AnyPeriod::Hour($p) => $body,
            AnyPeriod::Day($p) => $body,
            AnyPeriod::Month($p) => $body,
            AnyPeriod::Quarter($p) => $body,
            AnyPeriod::CalendarYear($p) => $body,
        }
    };
}

impl AnyPeriod {
    /// Granularity of the contained period.
    pub fn granularity(&self) -> Granularity {
        match self {
            AnyPeriod::HalfHour(_) => Granularity::HalfHour,
            AnyPeriod::Hour(_) => Granularity::Hour,
            AnyPeriod::Day(_) => Granularity::Day,
            AnyPeriod::Month(_) => Granularity::Month,
            AnyPeriod::Quarter(_) => Granularity::Quarter,
            AnyPeriod::CalendarYear(_) => Granularity::CalendarYear,
        }
    }

    pub fn ordinal(&self) -> i32 {
        dispatch!(self, p => p.ordinal())
    }

    /// Instant at which the contained period starts.
    pub fn start(&self) -> NaiveDateTime {
        dispatch!(self, p => p.start())
    }

    /// Instant at which the contained period ends (exclusive).
    pub fn end(&self) -> NaiveDateTime {
        dispatch!(self, p => p.end())
    }

    /// Builds a period of `granularity` from an ordinal.
    ///
    /// # Errors
    ///
    /// Returns [`PeriodError::OutOfRange`] if `ordinal` is outside the
    /// bounds of `granularity`.
    pub fn from_ordinal(granularity: Granularity, ordinal: i32) -> Result<Self, PeriodError> {
        granularity.check_ordinal(i64::from(ordinal))?;
        Ok(Self::from_ordinal_unchecked(granularity, ordinal))
    }

    fn from_ordinal_unchecked(granularity: Granularity, ordinal: i32) -> Self {
        use crate::period::sealed::Sealed;
        match granularity {
            Granularity::HalfHour => AnyPeriod::HalfHour(HalfHour::from_ordinal_unchecked(ordinal)),
            Granularity::Hour => AnyPeriod::Hour(Hour::from_ordinal_unchecked(ordinal)),
            Granularity::Day => AnyPeriod::Day(Day::from_ordinal_unchecked(ordinal)),
            Granularity::Month => AnyPeriod::Month(Month::from_ordinal_unchecked(ordinal)),
            Granularity::Quarter => AnyPeriod::Quarter(Quarter::from_ordinal_unchecked(ordinal)),
            Granularity::CalendarYear => {
                AnyPeriod::CalendarYear(CalendarYear::from_ordinal_unchecked(ordinal))
            }
        }
    }

    fn containing_tick(granularity: Granularity, tick: i64) -> Self {
        match granularity {
            Granularity::HalfHour => AnyPeriod::HalfHour(containing_tick(tick)),
            Granularity::Hour => AnyPeriod::Hour(containing_tick(tick)),
            Granularity::Day => AnyPeriod::Day(containing_tick(tick)),
            Granularity::Month => AnyPeriod::Month(containing_tick(tick)),
            Granularity::Quarter => AnyPeriod::Quarter(containing_tick(tick)),
            Granularity::CalendarYear => AnyPeriod::CalendarYear(containing_tick(tick)),
        }
    }

    /// Earliest supported period of `granularity`.
    pub fn min_period(granularity: Granularity) -> Self {
        Self::from_ordinal_unchecked(granularity, granularity.bounds().min)
    }

    /// Latest supported period of `granularity`.
    pub fn max_period(granularity: Granularity) -> Self {
        Self::from_ordinal_unchecked(granularity, granularity.bounds().max)
    }

    /// Parses `text` in the canonical form of `granularity`.
    ///
    /// # Errors
    ///
    /// Returns [`PeriodError::Parse`] if the text is not a valid period of
    /// that granularity.
    pub fn parse_as(granularity: Granularity, text: &str) -> Result<Self, PeriodError> {
        Ok(match granularity {
            Granularity::HalfHour => AnyPeriod::HalfHour(text.parse()?),
            Granularity::Hour => AnyPeriod::Hour(text.parse()?),
            Granularity::Day => AnyPeriod::Day(text.parse()?),
            Granularity::Month => AnyPeriod::Month(text.parse()?),
            Granularity::Quarter => AnyPeriod::Quarter(text.parse()?),
            Granularity::CalendarYear => AnyPeriod::CalendarYear(text.parse()?),
        })
    }

    /// Guesses the granularity of canonical `text` from its shape.
    pub fn detect_granularity(text: &str) -> Option<Granularity> {
        let granularity = match text.len() {
            4 => Granularity::CalendarYear,
            7 if text.as_bytes()[5] == b'Q' => Granularity::Quarter,
            7 => Granularity::Month,
            10 => Granularity::Day,
            13 => Granularity::Hour,
            15 => Granularity::HalfHour,
            _ => return None,
        };
        trace!(text, %granularity, "detected granularity");
        Some(granularity)
    }

    /// Earliest sub-period of `granularity` inside this period.
    ///
    /// # Errors
    ///
    /// Returns [`PeriodError::IncompatibleGranularity`] if `granularity` does
    /// not nest inside this period's granularity.
    pub fn first(&self, granularity: Granularity) -> Result<Self, PeriodError> {
        self.require_nesting(granularity)?;
        Ok(Self::containing_tick(granularity, dispatch!(self, p => start_tick(p))))
    }

    /// Latest sub-period of `granularity` inside this period.
    ///
    /// # Errors
    ///
    /// Same as [`AnyPeriod::first`].
    pub fn last(&self, granularity: Granularity) -> Result<Self, PeriodError> {
        self.require_nesting(granularity)?;
        Ok(Self::containing_tick(granularity, dispatch!(self, p => end_tick(p)) - 1))
    }

    /// Every sub-period of `granularity` inside this period, ascending.
    ///
    /// # Errors
    ///
    /// Same as [`AnyPeriod::first`].
    pub fn expand(&self, granularity: Granularity) -> Result<AnyRange, PeriodError> {
        let first = self.first(granularity)?;
        let last = self.last(granularity)?;
        Ok(AnyRange::new(first, last))
    }

    /// The period of `granularity` containing this one.
    ///
    /// # Errors
    ///
    /// Returns [`PeriodError::IncompatibleGranularity`] if this period does
    /// not nest inside `granularity`.
    pub fn to_coarser(&self, granularity: Granularity) -> Result<Self, PeriodError> {
        if !self.granularity().nests_within(granularity) {
            return Err(self.mismatch(granularity));
        }
        Ok(Self::containing_tick(granularity, dispatch!(self, p => start_tick(p))))
    }

    /// Compares two periods of the same granularity.
    ///
    /// # Errors
    ///
    /// Returns [`PeriodError::IncompatibleGranularity`] if the granularities
    /// differ.
    pub fn try_cmp(&self, other: &AnyPeriod) -> Result<Ordering, PeriodError> {
        self.require_same(other)?;
        Ok(self.ordinal().cmp(&other.ordinal()))
    }

    /// The period `n` periods after this one.
    ///
    /// # Errors
    ///
    /// Returns [`PeriodError::OutOfRange`] if the result falls outside the
    /// supported bounds.
    pub fn offset(&self, n: i32) -> Result<Self, PeriodError> {
        Ok(match self {
            AnyPeriod::HalfHour(p) => AnyPeriod::HalfHour(p.offset(n)?),
            AnyPeriod::Hour(p) => AnyPeriod::Hour(p.offset(n)?),
            AnyPeriod::Day(p) => AnyPeriod::Day(p.offset(n)?),
            AnyPeriod::Month(p) => AnyPeriod::Month(p.offset(n)?),
            AnyPeriod::Quarter(p) => AnyPeriod::Quarter(p.offset(n)?),
            AnyPeriod::CalendarYear(p) => AnyPeriod::CalendarYear(p.offset(n)?),
        })
    }

    /// Signed number of periods from `other` to `self`.
    ///
    /// # Errors
    ///
    /// Returns [`PeriodError::IncompatibleGranularity`] if the granularities
    /// differ.
    pub fn offset_from(&self, other: &AnyPeriod) -> Result<i32, PeriodError> {
        self.require_same(other)?;
        Ok(self.ordinal() - other.ordinal())
    }

    /// Every period from `self` to `end` inclusive.
    ///
    /// # Errors
    ///
    /// Returns [`PeriodError::IncompatibleGranularity`] if the granularities
    /// differ.
    pub fn enumerate_to(&self, end: &AnyPeriod) -> Result<AnyRange, PeriodError> {
        self.require_same(end)?;
        Ok(AnyRange::new(*self, *end))
    }

    /// Every weekday from `self` to `end` inclusive; both must be days.
    ///
    /// # Errors
    ///
    /// Returns [`PeriodError::IncompatibleGranularity`] if either period is
    /// not a day.
    pub fn enumerate_weekdays(&self, end: &AnyPeriod) -> Result<Weekdays, PeriodError> {
        match (self, end) {
            (AnyPeriod::Day(start), AnyPeriod::Day(end)) => Ok(enumerate_weekdays(*start, *end)),
            (AnyPeriod::Day(_), other) | (other, _) => Err(other.mismatch(Granularity::Day)),
        }
    }

    fn require_same(&self, other: &AnyPeriod) -> Result<(), PeriodError> {
        if self.granularity() != other.granularity() {
            return Err(other.mismatch(self.granularity()));
        }
        Ok(())
    }

    fn require_nesting(&self, finer: Granularity) -> Result<(), PeriodError> {
        if !finer.nests_within(self.granularity()) {
            debug!(period = %self, %finer, "granularity does not nest");
            return Err(PeriodError::IncompatibleGranularity {
                expected: self.granularity(),
                found: finer,
            });
        }
        Ok(())
    }

    fn mismatch(&self, expected: Granularity) -> PeriodError {
        debug!(period = %self, %expected, "granularity mismatch");
        PeriodError::IncompatibleGranularity {
            expected,
            found: self.granularity(),
        }
    }
}

impl fmt::Display for AnyPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        dispatch!(self, p => fmt::Display::fmt(p, f))
    }
}

impl fmt::Debug for AnyPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        dispatch!(self, p => fmt::Debug::fmt(p, f))
    }
}

impl FromStr for AnyPeriod {
    type Err = PeriodError;

    /// Parses any canonical form, choosing the granularity from the shape of
    /// the text.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Self::detect_granularity(s) {
            Some(granularity) => Self::parse_as(granularity, s),
            None => Err(PeriodError::Parse {
                granularity: Granularity::Day,
                input: s.to_string(),
                reason: "not the shape of any canonical period form".to_string(),
            }),
        }
    }
}

macro_rules! any_from {
    ($($ty:ident),+) => {
        $(impl From<$ty> for AnyPeriod {
            fn from(p: $ty) -> Self {
                AnyPeriod::$ty(p)
            }
        })+
    };
}

any_from!(HalfHour, Hour, Day, Month, Quarter, CalendarYear);

/// Ascending, inclusive run of periods of one runtime granularity.
#[derive(Debug, Clone)]
pub struct AnyRange {
    granularity: Granularity,
    front: i64,
    back: i64,
}

impl AnyRange {
    fn new(start: AnyPeriod, end: AnyPeriod) -> Self {
        Self {
            granularity: start.granularity(),
            front: i64::from(start.ordinal()),
            back: i64::from(end.ordinal()),
        }
    }

    /// Granularity of the periods this range yields.
    pub fn granularity(&self) -> Granularity {
        self.granularity
    }
}

impl Iterator for AnyRange {
    type Item = AnyPeriod;

    fn next(&mut self) -> Option<AnyPeriod> {
        if self.front > self.back {
            return None;
        }
        let period = AnyPeriod::from_ordinal_unchecked(self.granularity, self.front as i32);
        self.front += 1;
        Some(period)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::try_from(self.back - self.front + 1).unwrap_or(0);
        (n, Some(n))
    }
}

impl DoubleEndedIterator for AnyRange {
    fn next_back(&mut self) -> Option<AnyPeriod> {
        if self.front > self.back {
            return None;
        }
        let period = AnyPeriod::from_ordinal_unchecked(self.granularity, self.back as i32);
        self.back -= 1;
        Some(period)
    }
}

impl ExactSizeIterator for AnyRange {}

impl FusedIterator for AnyRange {}

#[cfg(test)]
mod tests {
    use super::*;

    fn any(text: &str) -> AnyPeriod {
        text.parse().unwrap()
    }

    #[test]
    fn detects_every_form() {
        assert_eq!(any("2019-08-30 10").granularity(), Granularity::Hour);
        assert_eq!(any("2019-08-30 22:0").granularity(), Granularity::HalfHour);
        assert_eq!(any("2019-08-30").granularity(), Granularity::Day);
        assert_eq!(any("2019-12").granularity(), Granularity::Month);
        assert_eq!(any("2019-Q1").granularity(), Granularity::Quarter);
        assert_eq!(any("2019").granularity(), Granularity::CalendarYear);
    }

    #[test]
    fn unknown_shape() {
        assert!(matches!(
            "2019-08-30T10:00".parse::<AnyPeriod>().unwrap_err(),
            PeriodError::Parse { .. }
        ));
        assert!("".parse::<AnyPeriod>().is_err());
    }

    #[test]
    fn display_matches_typed() {
        for text in ["2019-08-30 10", "2019-08-30 22:1", "2019-08-30", "2019-12", "2019-Q1", "2019"] {
            assert_eq!(any(text).to_string(), text);
        }
    }

    #[test]
    fn cross_granularity_compare_fails() {
        let err = any("2019-Q1").try_cmp(&any("2019-01")).unwrap_err();
        assert_eq!(
            err,
            PeriodError::IncompatibleGranularity {
                expected: Granularity::Quarter,
                found: Granularity::Month,
            }
        );
        assert_eq!(any("2019-Q1").try_cmp(&any("2019-Q2")).unwrap(), Ordering::Less);
    }

    #[test]
    fn first_quarter_of_day_fails() {
        let err = any("2019-08-30").first(Granularity::Quarter).unwrap_err();
        assert_eq!(
            err,
            PeriodError::IncompatibleGranularity {
                expected: Granularity::Day,
                found: Granularity::Quarter,
            }
        );
    }

    #[test]
    fn runtime_conversion() {
        let q = any("2019-Q1");
        assert_eq!(q.first(Granularity::Month).unwrap(), any("2019-01"));
        assert_eq!(q.last(Granularity::Day).unwrap(), any("2019-03-31"));
        assert_eq!(any("2019-08-30 22:1").to_coarser(Granularity::Quarter).unwrap(), any("2019-Q3"));
        assert!(q.to_coarser(Granularity::Month).is_err());
        let months: Vec<String> = any("2019-Q2")
            .expand(Granularity::Month)
            .unwrap()
            .map(|m| m.to_string())
            .collect();
        assert_eq!(months, ["2019-04", "2019-05", "2019-06"]);
    }

    #[test]
    fn enumerate_requires_same_granularity() {
        assert!(any("2019-01").enumerate_to(&any("2019-Q4")).is_err());
        let range = any("2019-11").enumerate_to(&any("2020-02")).unwrap();
        assert_eq!(range.granularity(), Granularity::Month);
        assert_eq!(range.len(), 4);
        assert_eq!(any("2020-02").enumerate_to(&any("2019-11")).unwrap().count(), 0);
    }

    #[test]
    fn weekdays_require_days() {
        let days = any("2019-08-30").enumerate_weekdays(&any("2019-09-04")).unwrap();
        assert_eq!(days.count(), 4);
        assert_eq!(
            any("2019-08").enumerate_weekdays(&any("2019-09")).unwrap_err(),
            PeriodError::IncompatibleGranularity {
                expected: Granularity::Day,
                found: Granularity::Month,
            }
        );
        assert!(any("2019-08-30").enumerate_weekdays(&any("2019-09")).is_err());
    }

    #[test]
    fn offset_and_difference() {
        let h = any("2019-08-30 10");
        let later = h.offset(2).unwrap();
        assert_eq!(later, any("2019-08-30 12"));
        assert_eq!(later.offset_from(&h).unwrap(), 2);
        assert!(later.offset_from(&any("2019-08-30")).is_err());
    }

    #[test]
    fn start_and_end_match_typed() {
        let q = any("2019-Q4");
        assert_eq!(q.start().to_string(), "2019-10-01 00:00:00");
        assert_eq!(q.end().to_string(), "2020-01-01 00:00:00");
        assert_eq!(any("2019-08-30 22:1").end().to_string(), "2019-08-30 23:00:00");
    }

    #[test]
    fn bounds() {
        assert_eq!(AnyPeriod::max_period(Granularity::Day).to_string(), "9998-12-31");
        assert_eq!(AnyPeriod::min_period(Granularity::Quarter).to_string(), "0001-Q1");
        assert!(AnyPeriod::max_period(Granularity::Month).offset(1).is_err());
        assert!(AnyPeriod::from_ordinal(Granularity::Month, -1).is_err());
    }

    #[test]
    fn serde_tagged() {
        let json = serde_json::to_string(&any("2019-Q1")).unwrap();
        assert_eq!(json, r#"{"granularity":"quarter","period":"2019-Q1"}"#);
        let back: AnyPeriod = serde_json::from_str(&json).unwrap();
        assert_eq!(back, any("2019-Q1"));
    }
}
