//! The [`TimePeriod`] trait shared by every period type, and the
//! [`Within`] relation that constrains granularity conversions.

use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

use crate::civil::{TICKS_PER_DAY, TICKS_PER_HOUR, civil_from_days, days_from_civil};
use crate::error::PeriodError;
use crate::granularity::{Granularity, max_tick, min_tick};
use crate::sequence::PeriodRange;
use crate::{CalendarYear, Day, HalfHour, Hour, Month, Quarter};

pub(crate) mod sealed {
    /// Keeps [`TimePeriod`](super::TimePeriod) closed to the six period types.
    pub trait Sealed {
        /// Builds a period from an ordinal that the caller has already
        /// validated against the bounds table.
        fn from_ordinal_unchecked(ordinal: i32) -> Self;
    }
}

/// A calendar period of fixed granularity.
///
/// Every period is identified by its ordinal: the number of whole periods of
/// the same granularity between the start of 0001-01-01 and the start of the
/// period. Periods are immutable; operations that move a period return a new
/// value.
pub trait TimePeriod:
    sealed::Sealed
    + Copy
    + Eq
    + Ord
    + Hash
    + fmt::Debug
    + fmt::Display
    + FromStr<Err = PeriodError>
    + Send
    + Sync
    + 'static
{
    /// Granularity of this period type.
    const GRANULARITY: Granularity;

    /// Position of this period relative to the epoch.
    fn ordinal(&self) -> i32;

    /// Builds the period with the given ordinal.
    ///
    /// # Errors
    ///
    /// Returns [`PeriodError::OutOfRange`] if `ordinal` is outside the
    /// bounds of this granularity.
    fn from_ordinal(ordinal: i32) -> Result<Self, PeriodError> {
        Self::GRANULARITY
            .check_ordinal(i64::from(ordinal))
            .map(Self::from_ordinal_unchecked)
    }

    /// Earliest supported period.
    fn min_period() -> Self {
        Self::from_ordinal_unchecked(Self::GRANULARITY.bounds().min)
    }

    /// Latest supported period.
    fn max_period() -> Self {
        Self::from_ordinal_unchecked(Self::GRANULARITY.bounds().max)
    }

    /// The period containing `instant`.
    ///
    /// # Errors
    ///
    /// Returns [`PeriodError::OutOfRange`] if `instant` falls outside the
    /// supported domain.
    fn from_timestamp(instant: NaiveDateTime) -> Result<Self, PeriodError> {
        let tick = tick_of(instant);
        if !(min_tick()..=max_tick()).contains(&tick) {
            return Err(PeriodError::OutOfRange {
                granularity: Self::GRANULARITY,
                ordinal: Self::GRANULARITY.ordinal_at_tick(tick),
            });
        }
        Ok(containing_tick(tick))
    }

    /// Instant at which this period starts.
    fn start(&self) -> NaiveDateTime {
        instant_of(start_tick(self))
    }

    /// Instant at which this period ends, which is the start of the next one.
    fn end(&self) -> NaiveDateTime {
        instant_of(end_tick(self))
    }

    /// The period `n` periods after this one (before it, for negative `n`).
    ///
    /// # Errors
    ///
    /// Returns [`PeriodError::OutOfRange`] if the result would fall outside
    /// the supported bounds.
    fn offset(&self, n: i32) -> Result<Self, PeriodError> {
        let ordinal = i64::from(self.ordinal()) + i64::from(n);
        Self::GRANULARITY
            .check_ordinal(ordinal)
            .map(Self::from_ordinal_unchecked)
    }

    /// Signed number of periods from `other` to `self`.
    fn offset_from(&self, other: &Self) -> i32 {
        self.ordinal() - other.ordinal()
    }

    /// Equivalent to `offset(1)`.
    fn next(&self) -> Result<Self, PeriodError> {
        self.offset(1)
    }

    /// Equivalent to `offset(-1)`.
    fn previous(&self) -> Result<Self, PeriodError> {
        self.offset(-1)
    }

    /// Every period from `self` to `end` inclusive, ascending.
    ///
    /// Empty when `end` is before `self`.
    fn enumerate_to(&self, end: &Self) -> PeriodRange<Self> {
        PeriodRange::new(*self, *end)
    }

    /// Earliest period of granularity `F` inside this period.
    fn first<F: Within<Self>>(&self) -> F {
        containing_tick(start_tick(self))
    }

    /// Latest period of granularity `F` inside this period.
    fn last<F: Within<Self>>(&self) -> F {
        containing_tick(end_tick(self) - 1)
    }

    /// Every period of granularity `F` inside this period, ascending.
    fn expand<F: Within<Self>>(&self) -> PeriodRange<F> {
        PeriodRange::new(self.first(), self.last())
    }

    /// The unique period of granularity `C` containing this period.
    fn to_coarser<C: TimePeriod>(&self) -> C
    where
        Self: Within<C>,
    {
        containing_tick(start_tick(self))
    }
}

/// Marks `Self` as nesting inside periods of type `C`.
///
/// Implemented for every calendrically valid pair, including each type with
/// itself, so conversions between non-nesting granularities do not compile.
pub trait Within<C: TimePeriod>: TimePeriod {}

macro_rules! within {
    ($finer:ty => $($coarser:ty),+) => {
        $(impl Within<$coarser> for $finer {})+
    };
}

within!(HalfHour => HalfHour, Hour, Day, Month, Quarter, CalendarYear);
within!(Hour => Hour, Day, Month, Quarter, CalendarYear);
within!(Day => Day, Month, Quarter, CalendarYear);
within!(Month => Month, Quarter, CalendarYear);
within!(Quarter => Quarter, CalendarYear);
within!(CalendarYear => CalendarYear);

/// Serializes a period as its canonical text and parses it back.
macro_rules! impl_text_serde {
    ($ty:ty) => {
        impl serde::Serialize for $ty {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(self)
            }
        }

        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let text = <String as serde::Deserialize>::deserialize(deserializer)?;
                text.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}
pub(crate) use impl_text_serde;

/// First half-hour tick of `period`.
pub(crate) fn start_tick<P: TimePeriod>(period: &P) -> i64 {
    P::GRANULARITY.start_tick(i64::from(period.ordinal()))
}

/// First half-hour tick after `period`.
pub(crate) fn end_tick<P: TimePeriod>(period: &P) -> i64 {
    P::GRANULARITY.start_tick(i64::from(period.ordinal()) + 1)
}

/// The period of type `P` containing `tick`, which must be inside the
/// supported domain.
pub(crate) fn containing_tick<P: TimePeriod>(tick: i64) -> P {
    P::from_ordinal_unchecked(P::GRANULARITY.ordinal_at_tick(tick) as i32)
}

/// Half-hour tick containing `instant`.
pub(crate) fn tick_of(instant: NaiveDateTime) -> i64 {
    let date = instant.date();
    let days = days_from_civil(date.year(), date.month() as u8, date.day() as u8);
    days * TICKS_PER_DAY
        + i64::from(instant.hour()) * TICKS_PER_HOUR
        + i64::from(instant.minute() / 30)
}

/// Instant at which half-hour `tick` starts.
pub(crate) fn instant_of(tick: i64) -> NaiveDateTime {
    let (year, month, day) = civil_from_days(tick.div_euclid(TICKS_PER_DAY));
    let within_day = tick.rem_euclid(TICKS_PER_DAY);
    let hour = (within_day / TICKS_PER_HOUR) as u32;
    let minute = (within_day % TICKS_PER_HOUR) as u32 * 30;
    NaiveDate::from_ymd_opt(year, u32::from(month), u32::from(day))
        .and_then(|date| date.and_hms_opt(hour, minute, 0))
        .expect("ticks of the supported domain are valid instants")
}
