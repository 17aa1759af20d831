//! Result reporting
//!
//! A [`SimulationReport`] captures what was simulated and what the arrival
//! analysis found. It is printed as text and optionally written as JSON.
//! The position tensor itself is never written out.

pub mod json;
pub mod text;

use crate::config::SimulationMode;
use crate::stats::ArrivalSummary;
use serde::{Deserialize, Serialize};

/// Summary of one simulation and its arrival analyses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    /// RFC 3339 timestamp of report creation
    pub generated_at: String,
    /// Generator used
    pub mode: SimulationMode,
    /// Number of runs in the tensor
    pub runs: usize,
    /// Steps per run in the tensor
    pub steps: usize,
    /// Lattice dimension
    pub dim: usize,
    /// Seed of the random stream, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Wall-clock simulation time in seconds
    pub elapsed_secs: f64,
    /// One summary per target distance
    pub arrivals: Vec<ArrivalSummary>,
}
