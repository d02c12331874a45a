//! Pointwise lift and drag coefficients.

use crate::corrections::apply_corrections;
use crate::error::{AeroError, AeroResult};
use crate::evaluator::{AeroEvaluator, CoefficientResult};
use crate::flow::FlowState;
use crate::model::AeroModel;
use ra_core::compressibility_root;
use ra_core::constants::THIN_AIRFOIL_CL_ALPHA;

/// Lift ceiling of the flat-plate model.
pub const FLAT_PLATE_CL_LIMIT: f64 = 3.5;
/// Constant drag of the flat-plate model.
pub const FLAT_PLATE_CD: f64 = 0.0200;

impl AeroEvaluator {
    /// Lift and drag coefficients at the flow state.
    ///
    /// `span_fraction` is required by the tabulated model and ignored otherwise.
    pub fn coefficients(
        &self,
        flow: &FlowState,
        span_fraction: Option<f64>,
    ) -> AeroResult<CoefficientResult> {
        flow.validate()?;

        let raw = match self.model() {
            AeroModel::FlatPlate => flat_plate(flow)?,
            AeroModel::TabulatedPolar(table) => {
                let r = span_fraction.ok_or(AeroError::Validation {
                    what: "xfoil_table coefficients need a span fraction",
                })?;
                CoefficientResult {
                    cl: table.cl(flow.alpha, r),
                    cd: table.cd(flow.alpha, r),
                }
            }
            // Reynolds and Mach effects are built into the model
            AeroModel::SemiEmpirical(model) => return model.evaluate(flow),
        };

        apply_corrections(raw, flow, self.corrections())
    }
}

/// Compressible thin-airfoil lift clipped at the fixed ceiling, constant drag.
fn flat_plate(flow: &FlowState) -> AeroResult<CoefficientResult> {
    let cl = THIN_AIRFOIL_CL_ALPHA * flow.alpha / compressibility_root(flow.mach)?;
    Ok(CoefficientResult {
        cl: cl.clamp(-FLAT_PLATE_CL_LIMIT, FLAT_PLATE_CL_LIMIT),
        cd: FLAT_PLATE_CD,
    })
}
