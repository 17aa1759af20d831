//! Coordinator module
//!
//! Runs a configured simulation end to end: generate walks with the selected
//! generator, run one arrival analysis per target, and collect everything
//! into a [`SimulationReport`].

use crate::config::{Config, SimulationConfig, SimulationMode};
use crate::distribution::uniform::UniformStepDistribution;
use crate::output::SimulationReport;
use crate::stats::arrival_summary;
use crate::walk::{simulate_with, Positions, WalkStore};
use crate::Result;
use anyhow::Context;
use std::time::Instant;

/// Run the simulation and analyses described by `config`
pub fn run(config: &Config) -> Result<SimulationReport> {
    let start = Instant::now();
    let positions = generate(&config.simulation)?;
    let elapsed = start.elapsed();

    let arrivals = config
        .analysis
        .targets
        .iter()
        .map(|&target| {
            arrival_summary(&positions, target)
                .with_context(|| format!("Arrival analysis failed for target {}", target))
        })
        .collect::<Result<Vec<_>>>()?;

    let (runs, time, dim) = positions.dim();
    Ok(SimulationReport {
        generated_at: chrono::Utc::now().to_rfc3339(),
        mode: config.simulation.mode,
        runs,
        steps: time - 1,
        dim,
        seed: config.simulation.seed,
        elapsed_secs: elapsed.as_secs_f64(),
        arrivals,
    })
}

/// Generate the position tensor with the configured generator
pub fn generate(sim: &SimulationConfig) -> Result<Positions> {
    match sim.mode {
        SimulationMode::Batch => {
            let mut source = UniformStepDistribution::from_seed_option(sim.seed);
            simulate_with(&mut source, sim.runs, sim.steps, sim.dim).context("Batch simulation failed")
        }
        SimulationMode::Incremental => grow_store(sim),
    }
}

/// Grow a walk store to `steps` steps in chunks, then add the remaining runs
fn grow_store(sim: &SimulationConfig) -> Result<Positions> {
    let mut store = WalkStore::new(sim.dim, sim.seed).context("Failed to create walk store")?;

    let chunk = sim.step_chunk.unwrap_or(sim.steps).max(1);
    let mut remaining = sim.steps;
    while remaining > 0 {
        let n = chunk.min(remaining);
        store.append_steps(n).context("Failed to append steps")?;
        remaining -= n;
    }

    if sim.runs > 1 {
        store.append_runs(sim.runs - 1).context("Failed to append runs")?;
    }

    log::info!("Walk store holds {}", store);
    Ok(store.into_positions())
}
