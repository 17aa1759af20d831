//! Random step sources
//!
//! This module provides the random sources that drive lattice walks. A source
//! answers two questions for every (run, step) slot: which axis the walker
//! moves along, and in which direction.
//!
//! # Sources
//!
//! - **Uniform**: axis uniform over `[0, D)`, sign uniform over {+1, -1}
//!   (the lattice random walk)
//! - **Scripted** (test builds only): replays a fixed list of draws
//!
//! Sources are always passed explicitly to the code that consumes them. There
//! is no ambient global generator, so a seeded source makes every simulation
//! that uses it reproducible.
//!
//! # Example
//!
//! ```
//! use latwalk::distribution::{StepDistribution, uniform::UniformStepDistribution};
//!
//! let mut source = UniformStepDistribution::with_seed(7);
//! let axis = source.next_axis(3);
//! let sign = source.next_sign();
//! assert!(axis < 3);
//! assert!(sign == 1 || sign == -1);
//! ```

/// Source of lattice step draws
///
/// Implementations must return axis indices in `[0, dim)` and signs in
/// {+1, -1}. Axis and sign draws are independent of each other.
///
/// # Thread Safety
///
/// Sources must be `Send` so a store owning one can move between threads.
/// No internal synchronization is provided; each source has one owner.
pub trait StepDistribution: Send {
    /// Draw the axis a single step moves along
    ///
    /// # Arguments
    ///
    /// * `dim` - Lattice dimension (number of axes)
    ///
    /// # Returns
    ///
    /// An axis index in the range [0, dim).
    fn next_axis(&mut self, dim: usize) -> usize;

    /// Draw the direction of a single step: +1 or -1
    fn next_sign(&mut self) -> i8;
}

#[cfg(test)]
pub mod scripted;
pub mod uniform;
