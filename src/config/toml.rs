//! TOML configuration file parsing
//!
//! A configuration file looks like:
//!
//! ```toml
//! [simulation]
//! mode = "incremental"
//! runs = 1000
//! steps = 5000
//! dim = 3
//! seed = 42
//! step_chunk = 500
//!
//! [analysis]
//! targets = [20.0, 30.0]
//!
//! [output]
//! json_output = "report.json"
//! ```
//!
//! Every section and field is optional; missing values take their defaults.

use super::*;
use crate::config::cli::Cli;
use crate::config::cli_convert::convert_mode;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Parse TOML configuration file
pub fn parse_toml_file(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    parse_toml_string(&contents)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Parse TOML configuration from string
pub fn parse_toml_string(contents: &str) -> Result<Config> {
    let config: Config = ::toml::from_str(contents)
        .context("Failed to parse TOML configuration")?;

    Ok(config)
}

/// Merge CLI arguments with TOML configuration (CLI takes precedence)
pub fn merge_cli_with_config(cli: &Cli, mut config: Config) -> Config {
    // Override simulation settings
    if let Some(mode) = cli.mode {
        config.simulation.mode = convert_mode(mode);
    }
    if let Some(runs) = cli.runs {
        config.simulation.runs = runs;
    }
    if let Some(steps) = cli.steps {
        config.simulation.steps = steps;
    }
    if let Some(dim) = cli.dim {
        config.simulation.dim = dim;
    }
    if let Some(seed) = cli.seed {
        config.simulation.seed = Some(seed);
    }
    if let Some(chunk) = cli.step_chunk {
        config.simulation.step_chunk = Some(chunk);
    }

    // Override analysis targets (the whole list, not appended)
    if !cli.targets.is_empty() {
        config.analysis.targets = cli.targets.clone();
    }

    // Override output settings
    if let Some(ref path) = cli.json_output {
        config.output.json_output = Some(path.clone());
    }
    if cli.compact_json {
        config.output.pretty = false;
    }

    config
}
