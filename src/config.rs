use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG: &str = "tempus.toml";

/// Top-level Tempus configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TempusConfig {
    /// Output settings.
    #[serde(default)]
    pub output: OutputToml,

    /// Demo settings.
    #[serde(default)]
    pub demo: DemoToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputToml {
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for OutputToml {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

fn default_format() -> String {
    "text".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DemoToml {
    #[serde(default = "default_sections")]
    pub sections: Vec<String>,
}

impl Default for DemoToml {
    fn default() -> Self {
        Self {
            sections: default_sections(),
        }
    }
}

fn default_sections() -> Vec<String> {
    [
        "creating",
        "parsing-formatting",
        "comparing",
        "offsetting",
        "offset-methods",
        "converting-granularity",
        "expanding",
        "time-period-ranges",
        "extension-methods",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// Loads the configuration.
///
/// An explicit path must exist. Without one, `tempus.toml` in the working
/// directory is used if present and defaults otherwise.
pub fn load(explicit: Option<&Path>) -> Result<TempusConfig> {
    let path = match explicit {
        Some(path) => path,
        None => {
            let fallback = Path::new(DEFAULT_CONFIG);
            if !fallback.exists() {
                debug!("no {DEFAULT_CONFIG} found, using defaults");
                return Ok(TempusConfig::default());
            }
            fallback
        }
    };

    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    let config = parse(&toml_str)
        .with_context(|| format!("failed to parse TOML config: {}", path.display()))?;
    debug!(path = %path.display(), "config loaded");
    Ok(config)
}

/// Parses configuration from TOML text.
pub fn parse(toml_str: &str) -> Result<TempusConfig> {
    Ok(toml::from_str(toml_str)?)
}
