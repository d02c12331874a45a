//! ra-core: shared foundation for rotoraero.
//!
//! Contains:
//! - units (uom angle types + degree/radian helpers)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{RaError, RaResult};
pub use numeric::*;
pub use units::*;
