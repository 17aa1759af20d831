//! Incremental walk store
//!
//! A [`WalkStore`] owns a position tensor and grows it in place over its
//! lifetime. Two operations are available:
//!
//! - `append_steps(n)`: every existing run walks `n` more steps, continuing
//!   from its current last position
//! - `append_runs(k)`: `k` new runs are added, each starting at the origin
//!   and already carrying as many steps as the existing runs
//!
//! The run count and step count only ever grow, every run always has the
//! same number of recorded steps, and step 0 is the origin for every run.
//!
//! # Reproducibility
//!
//! A store built with a seed draws all of its randomness from one
//! deterministic stream. Two stores with the same seed and dimension that
//! receive the same sequence of calls hold identical tensors.
//!
//! # Example
//!
//! ```
//! use latwalk::walk::WalkStore;
//!
//! let mut store = WalkStore::new(2, Some(1)).unwrap();
//! store.append_runs(3).unwrap();
//! assert_eq!(store.positions().dim(), (4, 1, 2));
//!
//! store.append_steps(5).unwrap();
//! assert_eq!(store.positions().dim(), (4, 6, 2));
//! ```

use super::integrator::{integrate, prepend_origin};
use super::steps::draw_steps;
use super::Positions;
use crate::config::validator::ensure_positive;
use crate::distribution::uniform::UniformStepDistribution;
use crate::distribution::StepDistribution;
use crate::error::WalkError;
use ndarray::{concatenate, Array3, ArrayView3, Axis};
use std::fmt;

/// Growable set of lattice walks sharing one step count
///
/// Not internally synchronized: callers sharing a store across threads must
/// serialize their own calls.
#[derive(Debug, Clone)]
pub struct WalkStore<D = UniformStepDistribution> {
    /// Lattice dimension, fixed for the store's lifetime
    dim: usize,

    /// Seed the uniform source was built from, if any
    seed: Option<u64>,

    /// Source of all randomness for this store
    source: D,

    /// Positions, shape (runs, steps + 1, dim)
    pos: Positions,
}

impl WalkStore<UniformStepDistribution> {
    /// Create a store holding one run at the origin with no steps
    ///
    /// With `Some(seed)` the store draws from a deterministic xoshiro256++
    /// stream, otherwise from an entropy-seeded one. Both `dim` and `seed`
    /// must be positive.
    pub fn new(dim: usize, seed: Option<u64>) -> Result<Self, WalkError> {
        if seed == Some(0) {
            return Err(WalkError::not_positive("seed", 0u8));
        }
        let mut store = Self::with_source(dim, UniformStepDistribution::from_seed_option(seed))?;
        store.seed = seed;
        Ok(store)
    }
}

impl<D: StepDistribution> WalkStore<D> {
    /// Create a store drawing from a caller-supplied source
    pub fn with_source(dim: usize, source: D) -> Result<Self, WalkError> {
        ensure_positive("dim", dim)?;

        Ok(Self {
            dim,
            seed: None,
            source,
            pos: Array3::zeros((1, 1, dim)),
        })
    }

    /// Lattice dimension
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Seed given at construction
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Number of runs currently held
    pub fn run_count(&self) -> usize {
        self.pos.len_of(Axis(0))
    }

    /// Number of steps recorded per run (excluding the origin row)
    pub fn step_count(&self) -> usize {
        self.pos.len_of(Axis(1)) - 1
    }

    /// Borrowed view of the position tensor
    pub fn positions(&self) -> ArrayView3<'_, f64> {
        self.pos.view()
    }

    /// Consume the store and return its position tensor
    pub fn into_positions(self) -> Positions {
        self.pos
    }

    /// Walk every existing run `step_count` more steps
    ///
    /// Each run continues from its current last position. Existing history
    /// is kept unchanged. On error nothing is drawn and nothing changes.
    pub fn append_steps(&mut self, step_count: usize) -> Result<(), WalkError> {
        ensure_positive("step_count", step_count)?;

        let runs = self.run_count();
        let batch = draw_steps(&mut self.source, runs, step_count, self.dim);

        let last = self.pos.index_axis(Axis(1), self.step_count());
        let segment = integrate(&batch, self.dim, Some(last))?;
        let grown = concatenate(Axis(1), &[self.pos.view(), segment.view()])?;
        self.pos = grown;

        log::debug!("Appended {} steps: {}", step_count, self);
        Ok(())
    }

    /// Add `run_count` new runs starting at the origin
    ///
    /// New runs get as many steps as the existing runs already have. While
    /// the store has no steps, new runs are bare origin rows and no
    /// randomness is consumed. Existing runs are never touched.
    pub fn append_runs(&mut self, run_count: usize) -> Result<(), WalkError> {
        ensure_positive("run_count", run_count)?;

        let steps = self.step_count();
        let fresh = if steps == 0 {
            Array3::zeros((run_count, 1, self.dim))
        } else {
            let batch = draw_steps(&mut self.source, run_count, steps, self.dim);
            prepend_origin(integrate(&batch, self.dim, None)?)?
        };
        let grown = concatenate(Axis(0), &[self.pos.view(), fresh.view()])?;
        self.pos = grown;

        log::debug!("Appended {} runs: {}", run_count, self);
        Ok(())
    }

    /// Walk every existing run one more step
    pub fn append_step(&mut self) -> Result<(), WalkError> {
        self.append_steps(1)
    }

    /// Add a single new run starting at the origin
    pub fn append_run(&mut self) -> Result<(), WalkError> {
        self.append_runs(1)
    }
}

impl<D> fmt::Display for WalkStore<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (runs, time, dim) = self.pos.dim();
        write!(f, "{} runs of {} steps in {} dimensions", runs, time - 1, dim)
    }
}
