//! ra-aero: section lift and drag coefficients for blade-element rotor solvers.
//!
//! Three interchangeable models, fixed when the evaluator is built:
//! - `flat_plate`: thin-airfoil lift (2π per radian) with a hard ceiling, constant drag
//! - `xfoil_table`: bilinear interpolation in a precomputed [`PolarTable`]
//! - `semi_empirical`: linear lift with a smooth stall limiter, Mach-derated lift
//!   bounds, parabolic drag with Reynolds scaling, post-stall and compressibility drag
//!
//! Every call is a pure function of the evaluator and the [`FlowState`]. Angles are
//! radians throughout; convert at the boundary with [`FlowState::from_degrees`].
//!
//! # Example
//!
//! ```
//! use ra_aero::{AeroEvaluator, CorrectionFlags, FlowState};
//!
//! let aero = AeroEvaluator::flat_plate(CorrectionFlags::NONE);
//! let flow = FlowState::new(0.1, 0.0, 1e6, 1e6).unwrap();
//!
//! let c = aero.coefficients(&flow, None).unwrap();
//! assert!((c.cl - 0.2 * std::f64::consts::PI).abs() < 1e-12);
//! assert_eq!(c.cd, 0.02);
//! ```
//!
//! [`PolarTable`]: ra_polar::PolarTable

pub mod coefficients;
pub mod corrections;
pub mod error;
pub mod evaluator;
pub mod flow;
pub mod lift;
pub mod model;
pub mod params;
pub mod stall;
pub mod sweep;

// Re-exports
pub use corrections::{apply_corrections, reynolds_drag_exponent};
pub use error::{AeroError, AeroResult};
pub use evaluator::{AeroEvaluator, CoefficientResult, LiftProperties};
pub use flow::FlowState;
pub use model::{AeroModel, CorrectionFlags, ModelVariant};
pub use params::{EmpiricalAirfoilParameters, EmpiricalParamsBuilder};
pub use stall::{ProfileDragFactor, SemiEmpiricalStallModel, StallEvaluation};
pub use sweep::{AlphaSweep, SweepResult, run_alpha_sweep};
