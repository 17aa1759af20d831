//! Displacement scatter and cumulative integration
//!
//! Turns a [`StepBatch`] into absolute positions:
//!
//! 1. Scatter: a zero `(R, S, D)` tensor gets `sign` written at
//!    `[run, step, axis]` for every slot, leaving exactly one nonzero
//!    coordinate per step
//! 2. Seed: the optional starting position is added into step 0
//! 3. Integrate: running sum along the step axis
//!
//! The result does not contain the starting position as a row of its own.
//! Batch generation prepends the origin with [`prepend_origin`]; the
//! incremental store appends the result after its existing last step.

use super::steps::StepBatch;
use crate::error::WalkError;
use ndarray::{concatenate, Array3, ArrayView2, Axis};

/// Integrate a step batch into positions of shape `(R, S, dim)`
///
/// `start` is the position each run starts from, shape `(R, dim)`. `None`
/// means the origin.
///
/// Fails with `DimensionMismatch` if a drawn axis is not below `dim` and
/// with `StartShape` if `start` does not have shape `(R, dim)`.
pub fn integrate(batch: &StepBatch, dim: usize, start: Option<ArrayView2<'_, f64>>) -> Result<Array3<f64>, WalkError> {
    let (runs, steps) = (batch.runs(), batch.steps());
    if let Some(start) = &start {
        if start.dim() != (runs, dim) {
            return Err(WalkError::StartShape { expected: (runs, dim), actual: start.dim() });
        }
    }
    if let Some(&axis) = batch.axes().iter().max() {
        if axis >= dim {
            return Err(WalkError::DimensionMismatch { expected: dim, actual: axis + 1 });
        }
    }

    let mut walk = Array3::<f64>::zeros((runs, steps, dim));

    let signs = batch.signs();
    for ((run, step), &axis) in batch.axes().indexed_iter() {
        walk[[run, step, axis]] = f64::from(signs[[run, step]]);
    }

    if let Some(start) = start {
        if steps > 0 {
            let mut first = walk.index_axis_mut(Axis(1), 0);
            first += &start;
        }
    }

    walk.accumulate_axis_inplace(Axis(1), |&prev, curr| *curr += prev);
    Ok(walk)
}

/// Prepend an all-zero step 0 row to every run
pub fn prepend_origin(walk: Array3<f64>) -> Result<Array3<f64>, WalkError> {
    let (runs, _, dim) = walk.dim();
    let origin = Array3::<f64>::zeros((runs, 1, dim));
    Ok(concatenate(Axis(1), &[origin.view(), walk.view()])?)
}
