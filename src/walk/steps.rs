//! Step draws for a batch of walks
//!
//! For every (run, step) slot a walk needs two independent draws: the axis it
//! moves along and the sign of the move. They are kept as two parallel
//! `(runs, steps)` arrays until the integrator turns them into positions.

use crate::distribution::StepDistribution;
use ndarray::{Array2, ArrayView2};

/// Axis and sign draws for a `(runs, steps)` block of walk steps
#[derive(Debug, Clone, PartialEq)]
pub struct StepBatch {
    axes: Array2<usize>,
    signs: Array2<i8>,
}

impl StepBatch {
    /// Build a batch from pre-drawn axis and sign arrays
    ///
    /// # Panics
    ///
    /// Panics if the two arrays do not have the same shape.
    pub fn from_parts(axes: Array2<usize>, signs: Array2<i8>) -> Self {
        assert_eq!(axes.dim(), signs.dim(), "Axis and sign arrays must have the same shape");
        Self { axes, signs }
    }

    /// Number of runs in the batch
    pub fn runs(&self) -> usize {
        self.axes.nrows()
    }

    /// Number of steps per run
    pub fn steps(&self) -> usize {
        self.axes.ncols()
    }

    /// Chosen axis per (run, step)
    pub fn axes(&self) -> ArrayView2<'_, usize> {
        self.axes.view()
    }

    /// Chosen sign per (run, step), +1 or -1
    pub fn signs(&self) -> ArrayView2<'_, i8> {
        self.signs.view()
    }
}

/// Draw `run_count x step_count` lattice steps in `dim` dimensions
///
/// All axis draws are taken first, then all sign draws, both in row-major
/// (run, step) order. Counts are expected to be validated by the caller; a
/// zero count simply yields an empty batch.
pub fn draw_steps<D>(source: &mut D, run_count: usize, step_count: usize, dim: usize) -> StepBatch
where
    D: StepDistribution + ?Sized,
{
    log::trace!("Drawing {} x {} steps in {} dimensions", run_count, step_count, dim);

    let axes = Array2::from_shape_simple_fn((run_count, step_count), || source.next_axis(dim));
    let signs = Array2::from_shape_simple_fn((run_count, step_count), || source.next_sign());

    StepBatch { axes, signs }
}
