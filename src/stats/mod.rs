//! Trajectory statistics
//!
//! Analyses that read a position tensor produced by [`crate::walk`] and never
//! modify it.
//!
//! - **Distance from origin**: per (run, time) Euclidean norm
//! - **First arrival**: per run, the first time index at which the distance
//!   reaches a target
//! - **Arrival summary**: how many runs arrived and their mean first-arrival
//!   time
//!
//! # Example
//!
//! ```
//! use latwalk::distribution::uniform::UniformStepDistribution;
//! use latwalk::stats::arrival_summary;
//! use latwalk::walk::simulate_with;
//!
//! let mut source = UniformStepDistribution::with_seed(3);
//! let pos = simulate_with(&mut source, 50, 400, 3).unwrap();
//!
//! let summary = arrival_summary(&pos, 5.0).unwrap();
//! assert_eq!(summary.total_runs, 50);
//! if let Some(mean) = summary.mean_first_arrival {
//!     assert!(mean >= 5.0);
//! }
//! ```

pub mod arrival;

pub use arrival::{
    arrival_summary, distances_from_origin, first_arrivals, mean_first_arrival, ArrivalSummary,
    DEFAULT_TARGET_DISTANCE,
};
