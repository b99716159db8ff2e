//! Period commands: parse, offset, expand, range and bounds.

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use serde::Serialize;
use tracing::{info, info_span};

use tempus_periods::{AnyPeriod, Granularity};

use crate::cli::{BoundsArgs, ExpandArgs, OffsetArgs, ParseArgs, RangeArgs};
use crate::convert;
use crate::output::{self, OutputFormat, Report};

/// Everything known about a single period.
#[derive(Debug, Serialize)]
pub struct PeriodReport {
    pub period: String,
    pub granularity: Granularity,
    pub ordinal: i32,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl From<AnyPeriod> for PeriodReport {
    fn from(p: AnyPeriod) -> Self {
        Self {
            period: p.to_string(),
            granularity: p.granularity(),
            ordinal: p.ordinal(),
            start: p.start(),
            end: p.end(),
        }
    }
}

impl Report for PeriodReport {
    fn lines(&self) -> Vec<String> {
        vec![
            format!("period:      {}", self.period),
            format!("granularity: {}", self.granularity),
            format!("ordinal:     {}", self.ordinal),
            format!("start:       {}", self.start),
            format!("end:         {}", self.end),
        ]
    }
}

#[derive(Debug, Serialize)]
pub struct OffsetReport {
    pub from: AnyPeriod,
    pub to: AnyPeriod,
    pub difference: i32,
}

impl Report for OffsetReport {
    fn lines(&self) -> Vec<String> {
        vec![
            self.to.to_string(),
            format!("{} - {} = {}", self.to, self.from, self.difference),
        ]
    }
}

/// A list of periods of one granularity.
#[derive(Debug, Serialize)]
pub struct ListReport {
    pub granularity: Granularity,
    pub count: usize,
    pub periods: Vec<String>,
}

impl ListReport {
    fn new(granularity: Granularity, periods: impl Iterator<Item = AnyPeriod>) -> Self {
        let periods: Vec<String> = periods.map(|p| p.to_string()).collect();
        Self {
            granularity,
            count: periods.len(),
            periods,
        }
    }
}

impl Report for ListReport {
    fn lines(&self) -> Vec<String> {
        self.periods.clone()
    }
}

#[derive(Debug, Serialize)]
pub struct BoundsEntry {
    pub granularity: Granularity,
    pub min: AnyPeriod,
    pub max: AnyPeriod,
}

#[derive(Debug, Serialize)]
pub struct BoundsReport {
    pub bounds: Vec<BoundsEntry>,
}

impl Report for BoundsReport {
    fn lines(&self) -> Vec<String> {
        self.bounds
            .iter()
            .map(|b| format!("{:<14} {} .. {}", b.granularity.to_string(), b.min, b.max))
            .collect()
    }
}

/// Parse a period and describe it.
pub fn run_parse(args: ParseArgs, format: OutputFormat) -> Result<()> {
    let _cmd = info_span!("parse").entered();
    output::emit(format, &parse(&args)?)
}

fn parse(args: &ParseArgs) -> Result<PeriodReport> {
    let granularity = args
        .granularity
        .as_deref()
        .map(convert::parse_granularity)
        .transpose()?;
    let period = convert::parse_period(&args.text, granularity)?;
    info!(%period, granularity = %period.granularity(), "parsed");
    Ok(period.into())
}

/// Offset a period and report the result.
pub fn run_offset(args: OffsetArgs, format: OutputFormat) -> Result<()> {
    let _cmd = info_span!("offset", n = args.n).entered();
    output::emit(format, &offset(&args)?)
}

fn offset(args: &OffsetArgs) -> Result<OffsetReport> {
    let from = convert::parse_period(&args.period, None)?;
    let to = from
        .offset(args.n)
        .with_context(|| format!("cannot offset {from} by {}", args.n))?;
    let difference = to.offset_from(&from)?;
    Ok(OffsetReport {
        from,
        to,
        difference,
    })
}

/// List the sub-periods of a period.
pub fn run_expand(args: ExpandArgs, format: OutputFormat) -> Result<()> {
    let _cmd = info_span!("expand").entered();
    output::emit(format, &expand(&args)?)
}

fn expand(args: &ExpandArgs) -> Result<ListReport> {
    let period = convert::parse_period(&args.period, None)?;
    let granularity = convert::parse_granularity(&args.granularity)?;
    let periods = period
        .expand(granularity)
        .with_context(|| format!("cannot expand {period} into {granularity} periods"))?;
    info!(%period, %granularity, count = periods.len(), "expanded");
    Ok(ListReport::new(granularity, periods))
}

/// Enumerate the periods between two periods, inclusive.
pub fn run_range(args: RangeArgs, format: OutputFormat) -> Result<()> {
    let _cmd = info_span!("range", weekdays = args.weekdays).entered();
    output::emit(format, &range(&args)?)
}

fn range(args: &RangeArgs) -> Result<ListReport> {
    let start = convert::parse_period(&args.start, None)?;
    let end = convert::parse_period(&args.end, None)?;
    let report = if args.weekdays {
        let days = start
            .enumerate_weekdays(&end)
            .context("--weekdays needs day periods")?;
        ListReport::new(Granularity::Day, days.map(AnyPeriod::from))
    } else {
        let periods = start
            .enumerate_to(&end)
            .with_context(|| format!("cannot enumerate from {start} to {end}"))?;
        ListReport::new(periods.granularity(), periods)
    };
    info!(%start, %end, count = report.count, "enumerated");
    Ok(report)
}

/// Report the supported bounds.
pub fn run_bounds(args: BoundsArgs, format: OutputFormat) -> Result<()> {
    let _cmd = info_span!("bounds").entered();
    output::emit(format, &bounds(&args)?)
}

fn bounds(args: &BoundsArgs) -> Result<BoundsReport> {
    let granularities = match &args.granularity {
        Some(name) => vec![convert::parse_granularity(name)?],
        None => Granularity::ALL.to_vec(),
    };
    let bounds = granularities
        .into_iter()
        .map(|granularity| BoundsEntry {
            granularity,
            min: AnyPeriod::min_period(granularity),
            max: AnyPeriod::max_period(granularity),
        })
        .collect();
    Ok(BoundsReport { bounds })
}
