//! Run selection for trajectory plots
//!
//! Plotting tools draw a handful of 3D trajectories out of a large batch.
//! [`select_runs`] prepares that input: it checks the tensor is
//! three-dimensional and picks distinct runs uniformly at random.

use super::Positions;
use crate::config::validator::ensure_positive;
use crate::error::WalkError;
use ndarray::{ArrayBase, Axis, Data, Ix3};
use rand::Rng;

/// Dimension a trajectory plot requires
pub const PLOT_DIM: usize = 3;

/// Number of runs a trajectory plot draws by default
pub const DEFAULT_PLOT_RUNS: usize = 10;

/// Pick `count` distinct runs from a 3D position tensor
///
/// Runs are sampled uniformly without replacement and returned in sampling
/// order as a new `(count, T, 3)` tensor.
///
/// # Errors
///
/// - `DimensionMismatch` if the dimension axis is not 3
/// - `NotPositive` if `count` is zero
/// - `SampleTooLarge` if `count` exceeds the number of runs
pub fn select_runs<S, R>(pos: &ArrayBase<S, Ix3>, count: usize, rng: &mut R) -> Result<Positions, WalkError>
where
    S: Data<Elem = f64>,
    R: Rng + ?Sized,
{
    let (runs, _, dim) = pos.dim();
    if dim != PLOT_DIM {
        return Err(WalkError::DimensionMismatch {
            expected: PLOT_DIM,
            actual: dim,
        });
    }
    ensure_positive("count", count)?;
    if count > runs {
        return Err(WalkError::SampleTooLarge {
            requested: count,
            available: runs,
        });
    }

    let indices = rand::seq::index::sample(rng, runs, count).into_vec();
    Ok(pos.select(Axis(0), &indices))
}
