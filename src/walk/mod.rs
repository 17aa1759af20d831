//! Lattice walk generation
//!
//! Walks live on the integer lattice Z^D. Each step moves exactly one unit
//! along exactly one axis; the axis and the direction come from a
//! [`StepDistribution`](crate::distribution::StepDistribution).
//!
//! # Position Tensor
//!
//! Every producer in this module hands out a tensor of shape `(R, S + 1, D)`:
//!
//! ```text
//! pos[r, t, :]  = position of run r after t steps
//! pos[r, 0, :]  = origin, for every run
//! ```
//!
//! # Execution Modes
//!
//! - **Batch** ([`simulate`], [`simulate_with`]): one call, one fresh tensor
//! - **Incremental** ([`WalkStore`]): a stateful tensor grown along the step
//!   axis (`append_steps`) or the run axis (`append_runs`)
//!
//! Both modes share the same two stages: [`steps::draw_steps`] picks an axis
//! and a sign for every (run, step) slot, and [`integrator::integrate`]
//! scatters those picks into one-hot displacement vectors and sums them
//! along the step axis.
//!
//! # Example
//!
//! ```
//! use latwalk::walk::simulate;
//!
//! let pos = simulate(4, 10, 2).unwrap();
//! assert_eq!(pos.dim(), (4, 11, 2));
//! assert!(pos.index_axis(ndarray::Axis(1), 0).iter().all(|&x| x == 0.0));
//! ```

pub mod batch;
pub mod integrator;
pub mod select;
pub mod steps;
pub mod store;

use ndarray::Array3;

/// Position tensor of shape `(runs, steps + 1, dim)`
pub type Positions = Array3<f64>;

pub use batch::{simulate, simulate_with};
pub use select::select_runs;
pub use store::WalkStore;
