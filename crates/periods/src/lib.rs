//! # tempus-periods
//!
//! Strongly-typed calendar periods of fixed granularity in the proleptic
//! Gregorian calendar.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["components / text / NaiveDateTime"] -->|"new / parse / from_timestamp"| B["Hour, HalfHour, Day, Month, Quarter, CalendarYear"]
//!     B -->|".offset(n)"| B
//!     B -->|".first() .last() .expand()"| C["finer periods"]
//!     B -->|".to_coarser()"| D["coarser period"]
//!     B -->|"enumerate_to()"| E["PeriodRange"]
//!     F["Day"] -->|"enumerate_weekdays()"| G["Weekdays"]
//!     B -->|"into()"| H["AnyPeriod"]
//! ```
//!
//! Every period type is a thin wrapper around an ordinal counted from
//! 0001-01-01. The supported domain runs from 0001-01-01 00:00 to
//! 9998-12-31 24:00 for every granularity.
//!
//! ## Quick Start
//!
//! ```ignore
//! use tempus_periods::{Day, Hour, Month, Quarter, TimePeriod};
//!
//! let ten_am = Hour::new(2019, 8, 30, 10)?;
//! let midday = ten_am.offset(2)?;
//! assert_eq!(midday.offset_from(&ten_am), 2);
//!
//! let months: Vec<Month> = Quarter::q2(2019)?.expand().collect();
//! assert_eq!(months.len(), 3);
//!
//! let start: Day = "2019-08-30".parse()?;
//! let weekdays = start.enumerate_weekdays("2019-09-04".parse()?).count();
//! assert_eq!(weekdays, 4);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `civil` | Proleptic Gregorian day arithmetic |
//! | `granularity` | Granularity tags and the bounds table |
//! | `period` | The `TimePeriod` trait and the `Within` nesting relation |
//! | `hour`, `day`, `month`, `quarter`, `year` | The period types |
//! | `sequence` | Lazy ranges and weekday filtering |
//! | `any` | Runtime-tagged periods |
//! | `text` | Canonical text scanning |
//! | `error` | Error types |

mod any;
mod civil;
mod day;
mod error;
mod granularity;
mod hour;
mod month;
mod period;
mod quarter;
mod sequence;
mod text;
mod year;

pub use any::{AnyPeriod, AnyRange};
pub use day::Day;
pub use error::{ComponentError, PeriodError};
pub use granularity::{Bounds, FIRST_YEAR, Granularity, LAST_YEAR};
pub use hour::{HalfHour, Hour};
pub use month::Month;
pub use period::{TimePeriod, Within};
pub use quarter::Quarter;
pub use sequence::{PeriodRange, Weekdays, enumerate_to, enumerate_weekdays};
pub use year::CalendarYear;
