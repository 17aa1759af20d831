//! latwalk - Lattice random walk simulation
//!
//! latwalk simulates discrete-time random walks on the integer lattice in
//! any dimension and derives first-arrival statistics from the resulting
//! trajectories.
//!
//! # Architecture
//!
//! - **Step sources**: injected, optionally seeded random sources
//! - **Batch generation**: one call produces a `(runs, steps + 1, dim)` tensor
//! - **Incremental store**: grow existing walks by steps, or add new walks
//! - **Arrival analysis**: mean first time a walk reaches a target distance
//!
//! # Example
//!
//! ```
//! use latwalk::stats::mean_first_arrival;
//! use latwalk::walk::WalkStore;
//!
//! let mut store = WalkStore::new(3, Some(42)).unwrap();
//! store.append_steps(500).unwrap();
//! store.append_runs(99).unwrap();
//!
//! let mean = mean_first_arrival(&store.positions(), 5.0).unwrap();
//! println!("mean first arrival at distance 5: {:?}", mean);
//! ```

pub mod config;
pub mod coordinator;
pub mod distribution;
pub mod error;
pub mod output;
pub mod stats;
pub mod walk;

// Re-export commonly used types
pub use config::Config;
pub use error::WalkError;
pub use walk::{simulate, simulate_with, Positions, WalkStore};

/// Result type used by the driver and configuration layers
pub type Result<T> = anyhow::Result<T>;
