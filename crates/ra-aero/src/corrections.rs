//! Reynolds and Mach corrections for the flat-plate and tabulated models.
//!
//! The semi-empirical model carries its own Reynolds and Mach handling and never
//! passes through here.

use crate::error::AeroResult;
use crate::flow::FlowState;
use crate::model::CorrectionFlags;
use crate::CoefficientResult;
use ra_core::compressibility_root;

/// Lower bound of the transitional Reynolds regime.
pub const RE_TRANSITION_LOW: f64 = 1e5;
/// Lower bound of the turbulent Reynolds regime.
pub const RE_TRANSITION_HIGH: f64 = 1e6;

/// Exponent `f` in `Cd * (Re/Re_ref)^f` for the regime containing `reynolds`.
pub fn reynolds_drag_exponent(reynolds: f64) -> f64 {
    if reynolds < RE_TRANSITION_LOW {
        -0.4
    } else if reynolds < RE_TRANSITION_HIGH {
        -1.0
    } else {
        -0.15
    }
}

/// Apply the enabled corrections to a raw model result.
///
/// Drag is left untouched when `reynolds <= 0`.
pub fn apply_corrections(
    raw: CoefficientResult,
    flow: &FlowState,
    flags: CorrectionFlags,
) -> AeroResult<CoefficientResult> {
    let mut out = raw;
    if flags.reynolds {
        if let Some(ratio) = flow.reynolds_ratio() {
            out.cd *= ratio.powf(reynolds_drag_exponent(flow.reynolds));
        }
    }
    if flags.mach {
        out.cl /= compressibility_root(flow.mach)?;
    }
    Ok(out)
}
