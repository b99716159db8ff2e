//! Granularity tags and the table of supported period bounds.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::civil::{TICKS_PER_DAY, TICKS_PER_HOUR, civil_from_days, days_from_civil};
use crate::error::PeriodError;

/// First calendar year inside the supported domain.
pub const FIRST_YEAR: i32 = 1;

/// Last calendar year inside the supported domain.
pub const LAST_YEAR: i32 = 9998;

/// The six period granularities.
///
/// Variants are ordered from finest to coarsest, so `a <= b` means periods of
/// granularity `a` nest inside periods of granularity `b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Granularity {
    HalfHour = 0,
    Hour = 1,
    Day = 2,
    Month = 3,
    Quarter = 4,
    CalendarYear = 5,
}

/// Inclusive ordinal bounds of one granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    /// Ordinal of the earliest supported period.
    pub min: i32,
    /// Ordinal of the latest supported period.
    pub max: i32,
}

impl Bounds {
    /// Returns whether `ordinal` lies inside these bounds.
    pub fn contains(self, ordinal: i64) -> bool {
        (i64::from(self.min)..=i64::from(self.max)).contains(&ordinal)
    }
}

/// Last half-hour tick of the supported domain (9998-12-31 23:30).
pub(crate) fn max_tick() -> i64 {
    days_from_civil(LAST_YEAR + 1, 1, 1) * TICKS_PER_DAY - 1
}

/// First half-hour tick of the supported domain (0001-01-01 00:00).
pub(crate) fn min_tick() -> i64 {
    days_from_civil(FIRST_YEAR, 1, 1) * TICKS_PER_DAY
}

static BOUNDS: LazyLock<[Bounds; 6]> = LazyLock::new(|| {
    let (lo, hi) = (min_tick(), max_tick());
    let table = Granularity::ALL.map(|g| Bounds {
        min: g.ordinal_at_tick(lo) as i32,
        max: g.ordinal_at_tick(hi) as i32,
    });
    debug!(first_year = FIRST_YEAR, last_year = LAST_YEAR, "period bounds initialised");
    table
});

impl Granularity {
    /// Every granularity, finest first.
    pub const ALL: [Granularity; 6] = [
        Granularity::HalfHour,
        Granularity::Hour,
        Granularity::Day,
        Granularity::Month,
        Granularity::Quarter,
        Granularity::CalendarYear,
    ];

    /// Canonical lower-case name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Granularity::HalfHour => "half-hour",
            Granularity::Hour => "hour",
            Granularity::Day => "day",
            Granularity::Month => "month",
            Granularity::Quarter => "quarter",
            Granularity::CalendarYear => "calendar-year",
        }
    }

    /// Returns whether periods of `self` nest inside periods of `coarser`.
    ///
    /// Every granularity nests inside itself.
    pub fn nests_within(self, coarser: Granularity) -> bool {
        self <= coarser
    }

    /// Supported ordinal bounds for this granularity.
    pub fn bounds(self) -> Bounds {
        BOUNDS[self as usize]
    }

    /// Validates an ordinal against the bounds table.
    pub(crate) fn check_ordinal(self, ordinal: i64) -> Result<i32, PeriodError> {
        if !self.bounds().contains(ordinal) {
            return Err(PeriodError::OutOfRange {
                granularity: self,
                ordinal,
            });
        }
        Ok(ordinal as i32)
    }

    /// Ordinal of the period of this granularity containing half-hour `tick`.
    pub(crate) fn ordinal_at_tick(self, tick: i64) -> i64 {
        match self {
            Granularity::HalfHour => tick,
            Granularity::Hour => tick.div_euclid(TICKS_PER_HOUR),
            Granularity::Day => tick.div_euclid(TICKS_PER_DAY),
            Granularity::Month => {
                let (year, month, _) = civil_from_days(tick.div_euclid(TICKS_PER_DAY));
                (i64::from(year) - 1) * 12 + i64::from(month) - 1
            }
            Granularity::Quarter => {
                let (year, month, _) = civil_from_days(tick.div_euclid(TICKS_PER_DAY));
                (i64::from(year) - 1) * 4 + (i64::from(month) - 1) / 3
            }
            Granularity::CalendarYear => {
                let (year, _, _) = civil_from_days(tick.div_euclid(TICKS_PER_DAY));
                i64::from(year) - 1
            }
        }
    }

    /// First half-hour tick of the period of this granularity with `ordinal`.
    ///
    /// Also defined one past the supported range, which is how period ends
    /// are computed.
    pub(crate) fn start_tick(self, ordinal: i64) -> i64 {
        match self {
            Granularity::HalfHour => ordinal,
            Granularity::Hour => ordinal * TICKS_PER_HOUR,
            Granularity::Day => ordinal * TICKS_PER_DAY,
            Granularity::Month => {
                let year = ordinal.div_euclid(12) + 1;
                let month = ordinal.rem_euclid(12) + 1;
                days_from_civil(year as i32, month as u8, 1) * TICKS_PER_DAY
            }
            Granularity::Quarter => {
                let year = ordinal.div_euclid(4) + 1;
                let month = ordinal.rem_euclid(4) * 3 + 1;
                days_from_civil(year as i32, month as u8, 1) * TICKS_PER_DAY
            }
            Granularity::CalendarYear => {
                days_from_civil((ordinal + 1) as i32, 1, 1) * TICKS_PER_DAY
            }
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Granularity {
    type Err = PeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "half-hour" | "halfhour" => Ok(Granularity::HalfHour),
            "hour" => Ok(Granularity::Hour),
            "day" => Ok(Granularity::Day),
            "month" => Ok(Granularity::Month),
            "quarter" => Ok(Granularity::Quarter),
            "calendar-year" | "calendaryear" | "year" => Ok(Granularity::CalendarYear),
            _ => Err(PeriodError::UnknownGranularity(s.to_string())),
        }
    }
}
