//! Error types for walk simulation and analysis
//!
//! Every public library operation returns `Result<T, WalkError>`. Validation
//! happens before any randomness is drawn or any tensor is touched, so an
//! error always leaves callers' state exactly as it was.

use thiserror::Error;

/// Errors raised by the simulation and analysis layers
#[derive(Debug, Error)]
pub enum WalkError {
    /// A count parameter arrived as something other than an integer
    #[error("{name} must be an integer, got {found}")]
    WrongType { name: &'static str, found: String },

    /// A count parameter is zero or negative
    #[error("{name} must be a positive integer, got {value}")]
    NotPositive { name: &'static str, value: i128 },

    /// Arrival target distance is not a finite positive number
    #[error("target distance must be a finite positive number, got {0}")]
    InvalidTarget(f64),

    /// Tensor dimension axis has the wrong length for the consumer
    #[error("position tensor must have dimension {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Starting positions do not line up with the step batch
    #[error("start positions must have shape {expected:?}, got {actual:?}")]
    StartShape {
        expected: (usize, usize),
        actual: (usize, usize),
    },

    /// More runs requested than the tensor holds
    #[error("cannot select {requested} runs from a tensor holding {available}")]
    SampleTooLarge { requested: usize, available: usize },

    /// Tensor concatenation failed
    #[error("tensor layout error: {0}")]
    Layout(#[from] ndarray::ShapeError),
}

impl WalkError {
    /// Build a `NotPositive` error from any integer value
    pub fn not_positive(name: &'static str, value: impl Into<i128>) -> Self {
        WalkError::NotPositive {
            name,
            value: value.into(),
        }
    }

    /// Build a `WrongType` error describing what was found instead
    pub fn wrong_type(name: &'static str, found: impl Into<String>) -> Self {
        WalkError::WrongType {
            name,
            found: found.into(),
        }
    }
}
