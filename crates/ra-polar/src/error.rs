//! Polar table errors.

use thiserror::Error;

/// Result type for polar table operations.
pub type PolarResult<T> = Result<T, PolarError>;

/// Errors raised while building or validating a polar table.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PolarError {
    /// Grid dimensions disagree with the axes.
    #[error("Shape mismatch for {what}: expected {expected}, got {actual}")]
    ShapeMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Axis values are not strictly increasing.
    #[error("Axis {what} is not strictly increasing at index {index}")]
    NonMonotonic { what: &'static str, index: usize },

    /// Axis too short to interpolate on.
    #[error("Axis {what} needs at least {min} points, got {len}")]
    TooFewPoints {
        what: &'static str,
        min: usize,
        len: usize,
    },

    /// NaN or infinite entry.
    #[error("Non-finite value in {what}")]
    NonFinite { what: &'static str },
}
