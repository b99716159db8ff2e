//! Pure conversion functions: config and CLI strings -> runtime types.

use anyhow::{Context, Result, bail};

use tempus_periods::{AnyPeriod, Granularity};

use crate::config::TempusConfig;
use crate::demo_cmd::Section;
use crate::output::OutputFormat;

/// Parses an output format name into the corresponding enum variant.
pub fn parse_output_format(s: &str) -> Result<OutputFormat> {
    match s.to_lowercase().as_str() {
        "text" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        other => bail!("unknown output format: {other:?}"),
    }
}

/// Parses a demo section name. Underscores and hyphens are interchangeable.
pub fn parse_section(s: &str) -> Result<Section> {
    match s.to_lowercase().replace('_', "-").as_str() {
        "creating" => Ok(Section::Creating),
        "parsing-formatting" => Ok(Section::ParsingFormatting),
        "comparing" => Ok(Section::Comparing),
        "offsetting" => Ok(Section::Offsetting),
        "offset-methods" | "offset-operators" => Ok(Section::OffsetMethods),
        "converting-granularity" => Ok(Section::ConvertingGranularity),
        "expanding" => Ok(Section::Expanding),
        "time-period-ranges" => Ok(Section::TimePeriodRanges),
        "extension-methods" => Ok(Section::ExtensionMethods),
        other => bail!("unknown demo section: {other:?}"),
    }
}

/// Parses a granularity name such as `hour` or `calendar-year`.
pub fn parse_granularity(s: &str) -> Result<Granularity> {
    Ok(s.parse()?)
}

/// Parses a period, as `granularity` when given and by text shape otherwise.
pub fn parse_period(text: &str, granularity: Option<Granularity>) -> Result<AnyPeriod> {
    let period = match granularity {
        Some(g) => AnyPeriod::parse_as(g, text),
        None => text.parse(),
    };
    period.with_context(|| format!("invalid period: {text:?}"))
}

/// Output format from config, overridden by the command line when given.
pub fn resolve_output_format(config: &TempusConfig, cli: Option<&str>) -> Result<OutputFormat> {
    parse_output_format(cli.unwrap_or(&config.output.format))
}

/// Demo sections from config, or the single section named on the command
/// line.
pub fn resolve_sections(config: &TempusConfig, cli: Option<&str>) -> Result<Vec<Section>> {
    match cli {
        Some(name) => Ok(vec![parse_section(name)?]),
        None => config
            .demo
            .sections
            .iter()
            .map(|s| parse_section(s))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config;

    #[test]
    fn output_format_names() {
        assert_eq!(parse_output_format("text").unwrap(), OutputFormat::Text);
        assert_eq!(parse_output_format("JSON").unwrap(), OutputFormat::Json);
        assert!(parse_output_format("yaml").is_err());
    }

    #[test]
    fn section_names() {
        assert_eq!(parse_section("creating").unwrap(), Section::Creating);
        assert_eq!(
            parse_section("parsing_formatting").unwrap(),
            Section::ParsingFormatting
        );
        assert_eq!(
            parse_section("offset_operators").unwrap(),
            Section::OffsetMethods
        );
        assert_eq!(
            parse_section("Time-Period-Ranges").unwrap(),
            Section::TimePeriodRanges
        );
        let err = parse_section("bogus").unwrap_err();
        assert!(err.to_string().contains("unknown demo section"));
    }

    #[test]
    fn every_section_name_round_trips() {
        for section in Section::ALL {
            assert_eq!(parse_section(section.name()).unwrap(), section);
        }
    }

    #[test]
    fn granularity_names() {
        assert_eq!(parse_granularity("half-hour").unwrap(), Granularity::HalfHour);
        assert_eq!(parse_granularity("year").unwrap(), Granularity::CalendarYear);
        assert!(parse_granularity("week").is_err());
    }

    #[test]
    fn period_with_and_without_granularity() {
        let detected = parse_period("2019-Q2", None).unwrap();
        assert_eq!(detected.granularity(), Granularity::Quarter);
        let explicit = parse_period("2019-08-30", Some(Granularity::Day)).unwrap();
        assert_eq!(explicit.to_string(), "2019-08-30");
        assert!(parse_period("2019-08", Some(Granularity::Day)).is_err());
        assert!(parse_period("nonsense", None).is_err());
    }

    #[test]
    fn cli_overrides_config() {
        let cfg = config::parse("[output]\nformat = \"json\"\n").unwrap();
        assert_eq!(resolve_output_format(&cfg, None).unwrap(), OutputFormat::Json);
        assert_eq!(
            resolve_output_format(&cfg, Some("text")).unwrap(),
            OutputFormat::Text
        );
    }

    #[test]
    fn sections_from_config() {
        let cfg = config::parse("[demo]\nsections = [\"expanding\", \"comparing\"]\n").unwrap();
        assert_eq!(
            resolve_sections(&cfg, None).unwrap(),
            vec![Section::Expanding, Section::Comparing]
        );
        assert_eq!(
            resolve_sections(&cfg, Some("creating")).unwrap(),
            vec![Section::Creating]
        );
        let bad = config::parse("[demo]\nsections = [\"nope\"]\n").unwrap();
        assert!(resolve_sections(&bad, None).is_err());
    }

    #[test]
    fn default_config_runs_every_section() {
        let cfg = TempusConfig::default();
        assert_eq!(resolve_sections(&cfg, None).unwrap(), Section::ALL.to_vec());
    }
}
