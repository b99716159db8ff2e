//! Rendering of command reports as text lines or JSON.

use std::io::{self, Write};

use anyhow::{Context, Result};
use serde::Serialize;

/// How command reports are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One human-readable line per item.
    #[default]
    Text,
    /// A single pretty-printed JSON document.
    Json,
}

/// A command result that can be rendered in either format.
pub trait Report: Serialize {
    /// Plain text rendering, one entry per output line.
    fn lines(&self) -> Vec<String>;
}

/// Writes `report` to stdout in `format`.
pub fn emit<R: Report>(format: OutputFormat, report: &R) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, format, report).context("failed to write output")
}

fn write_report<W: Write, R: Report>(out: &mut W, format: OutputFormat, report: &R) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for line in report.lines() {
                writeln!(out, "{line}")?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, report)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
