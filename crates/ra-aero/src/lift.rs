//! Lift-curve slope and zero-lift angle.

use crate::error::{AeroError, AeroResult};
use crate::evaluator::{AeroEvaluator, LiftProperties};
use crate::flow::FlowState;
use crate::model::AeroModel;
use ra_core::constants::THIN_AIRFOIL_CL_ALPHA;
use ra_core::{compressibility_root, linspace};
use ra_polar::{PolarTable, invert_linear};

/// Half-width of the secant used for the tabulated lift-curve slope [deg].
const SLOPE_HALF_WIDTH_DEG: f64 = 2.0;
/// Range searched for the tabulated zero-lift angle [deg].
const ZERO_LIFT_RANGE_DEG: f64 = 6.0;
const ZERO_LIFT_SAMPLES: usize = 10;

impl AeroEvaluator {
    /// Lift-curve slope [1/rad] and zero-lift angle [rad] at the flow state.
    ///
    /// `span_fraction` is required by the tabulated model and ignored otherwise.
    pub fn lift_properties(
        &self,
        flow: &FlowState,
        span_fraction: Option<f64>,
    ) -> AeroResult<LiftProperties> {
        flow.validate()?;
        if flow.exceeds_mach_advisory() {
            tracing::warn!(
                mach = flow.mach,
                "Mach number above 0.7, lift capability will be overestimated"
            );
        }

        let mut props = match self.model() {
            AeroModel::FlatPlate => LiftProperties {
                cl_alpha: THIN_AIRFOIL_CL_ALPHA,
                alpha_0_lift: 0.0,
            },
            AeroModel::TabulatedPolar(table) => {
                let r = span_fraction.ok_or(AeroError::Validation {
                    what: "xfoil_table lift properties need a span fraction",
                })?;
                table_lift_properties(table, r)
            }
            AeroModel::SemiEmpirical(model) => LiftProperties {
                cl_alpha: model.params().cl_alpha,
                alpha_0_lift: model.params().alpha_0_lift,
            },
        };

        if self.corrections().mach {
            props.cl_alpha /= compressibility_root(flow.mach)?;
        }
        Ok(props)
    }
}

/// Secant slope through the small-angle range and linearly inverted zero-lift angle.
fn table_lift_properties(table: &PolarTable, r: f64) -> LiftProperties {
    let h = SLOPE_HALF_WIDTH_DEG.to_radians();
    let cl_alpha = (table.cl(h, r) - table.cl(-h, r)) / (2.0 * h);

    let span = ZERO_LIFT_RANGE_DEG.to_radians();
    let alphas = linspace(-span, span, ZERO_LIFT_SAMPLES);
    let cls: Vec<f64> = alphas.iter().map(|&a| table.cl(a, r)).collect();
    let alpha_0_lift = invert_linear(0.0, &alphas, &cls);

    LiftProperties {
        cl_alpha,
        alpha_0_lift,
    }
}
