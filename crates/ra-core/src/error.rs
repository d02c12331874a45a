use thiserror::Error;

pub type RaResult<T> = Result<T, RaError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RaError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Out of domain: {what} = {value}")]
    OutOfDomain { what: &'static str, value: f64 },
}
