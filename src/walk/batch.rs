//! One-shot batch walk generation

use super::integrator::{integrate, prepend_origin};
use super::steps::draw_steps;
use super::Positions;
use crate::config::validator::ensure_positive;
use crate::distribution::uniform::UniformStepDistribution;
use crate::distribution::StepDistribution;
use crate::error::WalkError;

/// Simulate `run_count` independent walks of `step_count` steps in `dim`
/// dimensions, drawing from a fresh entropy-seeded source
///
/// Returns a tensor of shape `(run_count, step_count + 1, dim)` with the
/// origin at step 0. Results are not reproducible; use [`simulate_with`] and
/// a seeded source for that.
pub fn simulate(run_count: usize, step_count: usize, dim: usize) -> Result<Positions, WalkError> {
    let mut source = UniformStepDistribution::new();
    simulate_with(&mut source, run_count, step_count, dim)
}

/// Simulate walks drawing every step from `source`
///
/// All three counts are validated before the source is touched, so a
/// rejected call leaves the source's stream where it was.
pub fn simulate_with<D>(source: &mut D, run_count: usize, step_count: usize, dim: usize) -> Result<Positions, WalkError>
where
    D: StepDistribution + ?Sized,
{
    ensure_positive("run_count", run_count)?;
    ensure_positive("step_count", step_count)?;
    ensure_positive("dim", dim)?;

    let batch = draw_steps(source, run_count, step_count, dim);
    let pos = prepend_origin(integrate(&batch, dim, None)?)?;

    log::debug!("Simulated {} runs of {} steps in {} dimensions", run_count, step_count, dim);
    Ok(pos)
}
