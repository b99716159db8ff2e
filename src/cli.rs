use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Tempus calendar period toolkit.
#[derive(Parser)]
#[command(
    name = "tempus",
    version,
    about = "Inspect and enumerate strongly-typed calendar periods"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file (defaults to ./tempus.toml if present).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the output format from config ("text" or "json").
    #[arg(short, long, global = true)]
    pub format: Option<String>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Walk through the sample usage sections.
    Demo(DemoArgs),
    /// Parse a period and describe it.
    Parse(ParseArgs),
    /// Move a period by a number of periods.
    Offset(OffsetArgs),
    /// List the finer periods inside a period.
    Expand(ExpandArgs),
    /// Enumerate every period between two periods, inclusive.
    Range(RangeArgs),
    /// Show the supported bounds of one or all granularities.
    Bounds(BoundsArgs),
}

/// Arguments for the `demo` subcommand.
#[derive(clap::Args)]
pub struct DemoArgs {
    /// Run a single section instead of the configured list.
    #[arg(short, long)]
    pub section: Option<String>,
}

/// Arguments for the `parse` subcommand.
#[derive(clap::Args)]
pub struct ParseArgs {
    /// Period in canonical text form, e.g. "2019-08-30 10".
    pub text: String,

    /// Granularity to parse as; detected from the text shape when omitted.
    #[arg(short, long)]
    pub granularity: Option<String>,
}

/// Arguments for the `offset` subcommand.
#[derive(clap::Args)]
pub struct OffsetArgs {
    /// Period to move.
    pub period: String,

    /// Number of periods to move by; negative moves backwards.
    #[arg(allow_hyphen_values = true)]
    pub n: i32,
}

/// Arguments for the `expand` subcommand.
#[derive(clap::Args)]
pub struct ExpandArgs {
    /// Period to expand.
    pub period: String,

    /// Granularity of the sub-periods.
    pub granularity: String,
}

/// Arguments for the `range` subcommand.
#[derive(clap::Args)]
pub struct RangeArgs {
    /// First period of the range.
    pub start: String,

    /// Last period of the range.
    pub end: String,

    /// Only keep Monday to Friday (day ranges only).
    #[arg(short, long)]
    pub weekdays: bool,
}

/// Arguments for the `bounds` subcommand.
#[derive(clap::Args)]
pub struct BoundsArgs {
    /// Granularity to report; all granularities when omitted.
    pub granularity: Option<String>,
}
