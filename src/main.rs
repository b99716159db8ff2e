mod cli;
mod config;
mod convert;
mod demo_cmd;
mod logging;
mod output;
mod period_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = config::load(cli.config.as_deref())?;
    let format = convert::resolve_output_format(&config, cli.format.as_deref())?;

    match cli.command {
        Command::Demo(args) => demo_cmd::run(args, &config, format),
        Command::Parse(args) => period_cmd::run_parse(args, format),
        Command::Offset(args) => period_cmd::run_offset(args, format),
        Command::Expand(args) => period_cmd::run_expand(args, format),
        Command::Range(args) => period_cmd::run_range(args, format),
        Command::Bounds(args) => period_cmd::run_bounds(args, format),
    }
}
