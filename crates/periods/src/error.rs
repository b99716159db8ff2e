//! Error types for the tempus-periods crate.

use crate::granularity::Granularity;

/// Error type for all fallible operations in the tempus-periods crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PeriodError {
    /// Returned when the calendar components do not describe a real period,
    /// e.g. month 13 or the 30th of February.
    #[error("invalid components: {0}")]
    InvalidComponents(#[from] ComponentError),

    /// Returned when a period is calendrically valid but falls outside the
    /// supported range for its granularity.
    #[error("{granularity} ordinal {ordinal} is outside the supported range")]
    OutOfRange {
        /// Granularity of the rejected period.
        granularity: Granularity,
        /// Ordinal the operation would have produced.
        ordinal: i64,
    },

    /// Returned when text is not in the canonical form for a granularity.
    #[error("cannot parse {input:?} as {granularity}: {reason}")]
    Parse {
        /// Granularity that was being parsed.
        granularity: Granularity,
        /// The rejected input text.
        input: String,
        /// Why the input was rejected.
        reason: String,
    },

    /// Returned when an operation needs matching or nesting granularities
    /// and the operands do not satisfy that.
    #[error("incompatible granularity: expected {expected}, found {found}")]
    IncompatibleGranularity {
        /// Granularity the operation required.
        expected: Granularity,
        /// Granularity that was supplied.
        found: Granularity,
    },

    /// Returned when a granularity name is not recognised.
    #[error("unknown granularity: {0:?}")]
    UnknownGranularity(String),
}

/// A single calendar component that is out of its natural range.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum ComponentError {
    /// Month outside 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Day beyond the length of its month.
    #[error("invalid day: {day} for {year:04}-{month:02} (max {max_day})")]
    InvalidDay {
        /// Year of the rejected date.
        year: i32,
        /// Month of the rejected date.
        month: u8,
        /// The invalid day number that was provided.
        day: u8,
        /// The last valid day of that month.
        max_day: u8,
    },

    /// Hour outside 0..=23.
    #[error("invalid hour: {hour} (must be 0..=23)")]
    InvalidHour {
        /// The invalid hour that was provided.
        hour: u8,
    },

    /// Half-hour index other than 0 or 1.
    #[error("invalid half-hour index: {half} (must be 0 or 1)")]
    InvalidHalfHour {
        /// The invalid half-hour index that was provided.
        half: u8,
    },

    /// Quarter outside 1..=4.
    #[error("invalid quarter: {quarter} (must be 1..=4)")]
    InvalidQuarter {
        /// The invalid quarter number that was provided.
        quarter: u8,
    },
}
