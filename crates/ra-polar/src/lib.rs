//! ra-polar: tabulated airfoil polars for blade stations.
//!
//! Provides:
//! - `PolarTable`, a 2-D (angle of attack x span fraction) grid of Cl and Cd
//! - Linear interpolation helpers with constant (edge) extrapolation
//! - Resampling of raw per-station polars onto a common angle axis
//!
//! Tables are produced by an external polar provider; this crate only validates,
//! stores and queries them.
//!
//! # Example
//!
//! ```
//! use ra_polar::PolarTable;
//!
//! let table = PolarTable::from_degrees(
//!     vec![-4.0, 0.0, 4.0],
//!     vec![0.0, 1.0],
//!     vec![vec![-0.4, 0.0, 0.4], vec![-0.3, 0.1, 0.5]],
//!     vec![vec![0.012, 0.010, 0.012], vec![0.013, 0.011, 0.013]],
//! )
//! .unwrap();
//!
//! let cl = table.cl_deg(0.0, 1.0);
//! assert!((cl - 0.1).abs() < 1e-12);
//! ```

pub mod error;
pub mod interp;
pub mod station;
pub mod table;

pub use error::{PolarError, PolarResult};
pub use interp::{bilinear, interp1, invert_linear};
pub use station::StationPolar;
pub use table::PolarTable;
