//! CLI to Config conversion utilities

use crate::config::cli;
use crate::config::validator::validate_count;
use crate::config::SimulationMode;
use crate::error::WalkError;

/// Parse a count argument (e.g., "1000") as a positive integer
///
/// Integers that are zero or negative are `NotPositive`; anything that is
/// not an integer at all (a float, a boolean, a word) is `WrongType`.
pub fn parse_count(name: &'static str, s: &str) -> Result<usize, WalkError> {
    let s = s.trim();
    match s.parse::<i128>() {
        Ok(value) => validate_count(name, value),
        Err(_) => Err(WalkError::wrong_type(name, describe_non_integer(s))),
    }
}

/// Parse a seed argument as a positive `u64`
pub fn parse_seed(s: &str) -> Result<u64, WalkError> {
    let s = s.trim();
    if let Ok(seed) = s.parse::<u64>() {
        if seed == 0 {
            return Err(WalkError::not_positive("seed", seed));
        }
        return Ok(seed);
    }
    match s.parse::<i128>() {
        Ok(value) if value <= 0 => Err(WalkError::not_positive("seed", value)),
        Ok(value) => Err(WalkError::wrong_type("seed", format!("out-of-range integer {}", value))),
        Err(_) => Err(WalkError::wrong_type("seed", describe_non_integer(s))),
    }
}

pub(crate) fn parse_runs(s: &str) -> Result<usize, WalkError> {
    parse_count("runs", s)
}

pub(crate) fn parse_steps(s: &str) -> Result<usize, WalkError> {
    parse_count("steps", s)
}

pub(crate) fn parse_dim(s: &str) -> Result<usize, WalkError> {
    parse_count("dim", s)
}

pub(crate) fn parse_step_chunk(s: &str) -> Result<usize, WalkError> {
    parse_count("step_chunk", s)
}

fn describe_non_integer(s: &str) -> String {
    if s.parse::<bool>().is_ok() {
        format!("boolean `{}`", s)
    } else if s.parse::<f64>().is_ok() {
        format!("float `{}`", s)
    } else {
        format!("string {:?}", s)
    }
}

/// Convert CLI SimulationMode to config SimulationMode
pub fn convert_mode(cli_mode: cli::SimulationMode) -> SimulationMode {
    match cli_mode {
        cli::SimulationMode::Batch => SimulationMode::Batch,
        cli::SimulationMode::Incremental => SimulationMode::Incremental,
    }
}
