//! Error types for coefficient evaluation.

use ra_core::RaError;
use ra_polar::PolarError;
use thiserror::Error;

/// Errors that can occur while building an evaluator or evaluating coefficients.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AeroError {
    /// Evaluator cannot be built from the supplied configuration.
    #[error("Configuration error: {what}")]
    Configuration { what: String },

    /// Flow condition outside the range where the model is defined.
    #[error("Domain error: {what} = {value}")]
    Domain { what: &'static str, value: f64 },

    /// Required per-call input missing.
    #[error("Validation error: {what}")]
    Validation { what: &'static str },

    #[error("Polar table error: {0}")]
    Table(#[from] PolarError),
}

pub type AeroResult<T> = Result<T, AeroError>;

impl From<RaError> for AeroError {
    fn from(e: RaError) -> Self {
        match e {
            RaError::NonFinite { what, value } | RaError::OutOfDomain { what, value } => {
                AeroError::Domain { what, value }
            }
            RaError::InvalidArg { what } => AeroError::Validation { what },
        }
    }
}
