//! Demo command: a guided tour of the period types.

use anyhow::Result;
use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, info_span};

use tempus_periods::{CalendarYear, Day, HalfHour, Hour, Month, Quarter, TimePeriod};

use crate::cli::DemoArgs;
use crate::config::TempusConfig;
use crate::convert;
use crate::output::{self, Report};

/// One section of the demo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    Creating,
    ParsingFormatting,
    Comparing,
    Offsetting,
    OffsetMethods,
    ConvertingGranularity,
    Expanding,
    TimePeriodRanges,
    ExtensionMethods,
}

impl Section {
    /// Every section, in presentation order.
    pub const ALL: [Section; 9] = [
        Section::Creating,
        Section::ParsingFormatting,
        Section::Comparing,
        Section::Offsetting,
        Section::OffsetMethods,
        Section::ConvertingGranularity,
        Section::Expanding,
        Section::TimePeriodRanges,
        Section::ExtensionMethods,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Section::Creating => "creating",
            Section::ParsingFormatting => "parsing-formatting",
            Section::Comparing => "comparing",
            Section::Offsetting => "offsetting",
            Section::OffsetMethods => "offset-methods",
            Section::ConvertingGranularity => "converting-granularity",
            Section::Expanding => "expanding",
            Section::TimePeriodRanges => "time-period-ranges",
            Section::ExtensionMethods => "extension-methods",
        }
    }

    /// Output lines of this section.
    pub fn lines(self) -> Result<Vec<String>> {
        match self {
            Section::Creating => creating(),
            Section::ParsingFormatting => parsing_formatting(),
            Section::Comparing => comparing(),
            Section::Offsetting => offsetting(),
            Section::OffsetMethods => offset_methods(),
            Section::ConvertingGranularity => converting_granularity(),
            Section::Expanding => expanding(),
            Section::TimePeriodRanges => time_period_ranges(),
            Section::ExtensionMethods => extension_methods(),
        }
    }
}

#[derive(Debug, Serialize)]
struct SectionOutput {
    section: Section,
    lines: Vec<String>,
}

#[derive(Debug, Serialize)]
struct DemoReport {
    sections: Vec<SectionOutput>,
}

impl Report for DemoReport {
    fn lines(&self) -> Vec<String> {
        self.sections
            .iter()
            .flat_map(|s| s.lines.iter().cloned())
            .collect()
    }
}

/// Run the selected demo sections.
pub fn run(args: DemoArgs, config: &TempusConfig, format: output::OutputFormat) -> Result<()> {
    let _cmd = info_span!("demo").entered();
    let sections = convert::resolve_sections(config, args.section.as_deref())?;
    let report = build(&sections)?;
    output::emit(format, &report)
}

fn build(sections: &[Section]) -> Result<DemoReport> {
    let sections = sections
        .iter()
        .map(|&section| {
            let _span = info_span!("section", name = section.name()).entered();
            let lines = section.lines()?;
            debug!(n_lines = lines.len(), "section rendered");
            Ok(SectionOutput { section, lines })
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(DemoReport { sections })
}

fn creating() -> Result<Vec<String>> {
    let mar19 = Month::new(2019, 3)?;
    let aug19 = Month::august(2019)?;
    let midnight = NaiveDate::from_ymd_opt(2020, 12, 25)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .ok_or_else(|| anyhow::anyhow!("invalid sample date"))?;
    let christmas2020 = Day::from_timestamp(midnight)?;
    Ok(vec![
        mar19.to_string(),
        aug19.to_string(),
        christmas2020.to_string(),
    ])
}

fn parsing_formatting() -> Result<Vec<String>> {
    let dec19: Month = "2019-12".parse()?;
    Ok(vec![dec19.to_string()])
}

fn comparing() -> Result<Vec<String>> {
    let qu119 = Quarter::new(2019, 1)?;
    let qu219 = Quarter::q2(2019)?;
    Ok(vec![
        format!("{:?}", qu119.cmp(&qu219)),
        (qu119 < qu219).to_string(),
        (qu119 <= qu219).to_string(),
        (qu119 == qu219).to_string(),
        (qu119 != qu219).to_string(),
        (qu119 > qu219).to_string(),
        (qu119 >= qu219).to_string(),
    ])
}

fn offsetting() -> Result<Vec<String>> {
    let ten_am = Hour::new(2019, 8, 30, 10)?;
    let midday = ten_am.offset(2)?;
    let num_hours = midday.offset_from(&ten_am);
    Ok(vec![midday.to_string(), num_hours.to_string()])
}

fn offset_methods() -> Result<Vec<String>> {
    let cal_year19 = CalendarYear::new(2019)?;
    let cal_year22 = cal_year19.offset(3)?;
    let years_difference = cal_year22.offset_from(&cal_year19);

    let mut lines = vec![
        cal_year22.to_string(),
        years_difference.to_string(),
        String::new(),
        "Incrementing Half Hour".to_string(),
    ];

    let mut half_hour = HalfHour::new(2019, 8, 30, 22, 0)?;
    lines.push(half_hour.to_string());
    for _ in 0..2 {
        half_hour = half_hour.next()?;
        lines.push(half_hour.to_string());
    }

    lines.push(String::new());
    lines.push("Decrementing Half Hour".to_string());
    for _ in 0..3 {
        half_hour = half_hour.previous()?;
        lines.push(half_hour.to_string());
    }
    Ok(lines)
}

fn converting_granularity() -> Result<Vec<String>> {
    let qu119 = Quarter::q1(2019)?;
    Ok(vec![
        format!("The first month in Q1-19 is {}", qu119.first::<Month>()),
        format!("The last month in Q1-19 is {}", qu119.last::<Month>()),
        String::new(),
    ])
}

fn expanding() -> Result<Vec<String>> {
    let qu219 = Quarter::q2(2019)?;
    let mut lines = vec!["All the months in Q2-19:".to_string()];
    lines.extend(qu219.expand::<Month>().map(|m| m.to_string()));
    Ok(lines)
}

fn time_period_ranges() -> Result<Vec<String>> {
    Ok(vec![
        String::new(),
        format!("Minimum Day: {}", Day::min_period()),
        format!("Maximum Day: {}", Day::max_period()),
    ])
}

fn extension_methods() -> Result<Vec<String>> {
    let quarter_start = Quarter::q3(2020)?;
    let quarter_end = Quarter::q2(2021)?;
    let mut lines = vec![
        String::new(),
        format!("All the quarters from {quarter_start} to {quarter_end}"),
    ];
    lines.extend(
        quarter_start
            .enumerate_to(&quarter_end)
            .map(|q| q.to_string()),
    );

    let day_start = Day::new(2019, 8, 30)?;
    let day_end = Day::new(2019, 9, 4)?;
    lines.push(String::new());
    lines.push(format!("All week days from {day_start} to {day_end}"));
    lines.extend(day_start.enumerate_weekdays(day_end).map(|d| d.to_string()));
    Ok(lines)
}
