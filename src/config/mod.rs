//! Configuration module
//!
//! Handles CLI argument parsing, TOML configuration files, and validation.

pub mod cli;
pub mod cli_convert;
pub mod toml;
pub mod validator;

use crate::error::WalkError;
use crate::stats::DEFAULT_TARGET_DISTANCE;
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Complete run configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Which walk generator to drive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SimulationMode {
    /// One-shot generation of the whole tensor
    #[default]
    Batch,
    /// Grow a walk store step chunk by step chunk, then add runs
    Incremental,
}

impl fmt::Display for SimulationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationMode::Batch => write!(f, "batch"),
            SimulationMode::Incremental => write!(f, "incremental"),
        }
    }
}

/// Walk generation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Generator to use
    #[serde(default)]
    pub mode: SimulationMode,
    /// Number of independent walks
    #[serde(default = "default_runs", deserialize_with = "de_runs")]
    pub runs: usize,
    /// Steps per walk
    #[serde(default = "default_steps", deserialize_with = "de_steps")]
    pub steps: usize,
    /// Lattice dimension
    #[serde(default = "default_dim", deserialize_with = "de_dim")]
    pub dim: usize,
    /// Seed for a reproducible random stream
    #[serde(default, deserialize_with = "de_seed", skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Steps appended per call in incremental mode (default: all at once)
    #[serde(default, deserialize_with = "de_step_chunk", skip_serializing_if = "Option::is_none")]
    pub step_chunk: Option<usize>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            mode: SimulationMode::default(),
            runs: default_runs(),
            steps: default_steps(),
            dim: default_dim(),
            seed: None,
            step_chunk: None,
        }
    }
}

fn default_runs() -> usize {
    1000
}

fn default_steps() -> usize {
    5000
}

fn default_dim() -> usize {
    3
}

/// Arrival analysis parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Target distances, one arrival analysis each
    #[serde(default = "default_targets")]
    pub targets: Vec<f64>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            targets: default_targets(),
        }
    }
}

fn default_targets() -> Vec<f64> {
    vec![DEFAULT_TARGET_DISTANCE]
}

/// Report output settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// JSON report file path
    pub json_output: Option<PathBuf>,
    /// Pretty-print the JSON report
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            json_output: None,
            pretty: default_pretty(),
        }
    }
}

fn default_pretty() -> bool {
    true
}

// Count fields go through the same positive-integer gate as the library API,
// so `steps = true`, `steps = 2.5` and `steps = -3` are rejected with the
// same error taxonomy.

fn de_runs<'de, D: Deserializer<'de>>(d: D) -> Result<usize, D::Error> {
    deserialize_count(d, "runs")
}

fn de_steps<'de, D: Deserializer<'de>>(d: D) -> Result<usize, D::Error> {
    deserialize_count(d, "steps")
}

fn de_dim<'de, D: Deserializer<'de>>(d: D) -> Result<usize, D::Error> {
    deserialize_count(d, "dim")
}

fn de_step_chunk<'de, D: Deserializer<'de>>(d: D) -> Result<Option<usize>, D::Error> {
    deserialize_count(d, "step_chunk").map(Some)
}

fn de_seed<'de, D: Deserializer<'de>>(d: D) -> Result<Option<u64>, D::Error> {
    d.deserialize_any(CountVisitor { name: "seed" }).map(Some)
}

fn deserialize_count<'de, D: Deserializer<'de>>(d: D, name: &'static str) -> Result<usize, D::Error> {
    let value = d.deserialize_any(CountVisitor { name })?;
    usize::try_from(value).map_err(|_| {
        de::Error::custom(WalkError::wrong_type(name, format!("out-of-range integer {}", value)))
    })
}

/// Accepts strictly positive integers, with distinct errors for wrong types
/// and non-positive values
struct CountVisitor {
    name: &'static str,
}

impl<'de> Visitor<'de> for CountVisitor {
    type Value = u64;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a positive integer for {}", self.name)
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<u64, E> {
        Err(E::custom(WalkError::wrong_type(self.name, format!("boolean `{}`", v))))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<u64, E> {
        if v <= 0 {
            return Err(E::custom(WalkError::not_positive(self.name, v)));
        }
        Ok(v as u64)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<u64, E> {
        if v == 0 {
            return Err(E::custom(WalkError::not_positive(self.name, v)));
        }
        Ok(v)
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<u64, E> {
        Err(E::custom(WalkError::wrong_type(self.name, format!("float `{}`", v))))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<u64, E> {
        Err(E::custom(WalkError::wrong_type(self.name, format!("string {:?}", v))))
    }
}
