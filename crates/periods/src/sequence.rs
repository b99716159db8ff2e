//! Lazy period sequences.

use std::iter::FusedIterator;
use std::marker::PhantomData;

use crate::day::Day;
use crate::period::TimePeriod;

/// Ascending, inclusive run of consecutive periods.
///
/// Produced by [`enumerate_to`] and [`TimePeriod::expand`]. The iterator only
/// holds two cursors, so cloning it restarts the sequence from the current
/// position without touching the source periods.
#[derive(Debug, Clone)]
pub struct PeriodRange<P> {
    front: i64,
    back: i64,
    _period: PhantomData<P>,
}

impl<P: TimePeriod> PeriodRange<P> {
    /// Every period from `start` to `end` inclusive; empty if `end < start`.
    pub fn new(start: P, end: P) -> Self {
        Self {
            front: i64::from(start.ordinal()),
            back: i64::from(end.ordinal()),
            _period: PhantomData,
        }
    }

    fn remaining(&self) -> usize {
        usize::try_from(self.back - self.front + 1).unwrap_or(0)
    }
}

impl<P: TimePeriod> Iterator for PeriodRange<P> {
    type Item = P;

    fn next(&mut self) -> Option<P> {
        if self.front > self.back {
            return None;
        }
        let period = P::from_ordinal_unchecked(self.front as i32);
        self.front += 1;
        Some(period)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl<P: TimePeriod> DoubleEndedIterator for PeriodRange<P> {
    fn next_back(&mut self) -> Option<P> {
        if self.front > self.back {
            return None;
        }
        let period = P::from_ordinal_unchecked(self.back as i32);
        self.back -= 1;
        Some(period)
    }
}

impl<P: TimePeriod> ExactSizeIterator for PeriodRange<P> {}

impl<P: TimePeriod> FusedIterator for PeriodRange<P> {}

/// Monday-to-Friday days of an inclusive day range.
#[derive(Debug, Clone)]
pub struct Weekdays {
    days: PeriodRange<Day>,
}

impl Iterator for Weekdays {
    type Item = Day;

    fn next(&mut self) -> Option<Day> {
        self.days.find(|d| d.is_weekday())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.days.len()))
    }
}

impl DoubleEndedIterator for Weekdays {
    fn next_back(&mut self) -> Option<Day> {
        self.days.rfind(|d| d.is_weekday())
    }
}

impl FusedIterator for Weekdays {}

/// Generates every period from `start` to `end` inclusive, ascending.
///
/// The sequence is empty when `end` is before `start`.
///
/// # Example
///
/// ```ignore
/// let start = Quarter::q3(2020)?;
/// let end = Quarter::q2(2021)?;
/// let quarters: Vec<Quarter> = enumerate_to(start, end).collect();
/// // 2020-Q3, 2020-Q4, 2021-Q1, 2021-Q2
/// ```
pub fn enumerate_to<P: TimePeriod>(start: P, end: P) -> PeriodRange<P> {
    PeriodRange::new(start, end)
}

/// Generates the weekdays (Monday to Friday) from `start` to `end` inclusive.
///
/// Same inclusive and empty-if-reversed semantics as [`enumerate_to`].
pub fn enumerate_weekdays(start: Day, end: Day) -> Weekdays {
    Weekdays {
        days: PeriodRange::new(start, end),
    }
}
