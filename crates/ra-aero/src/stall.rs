//! Semi-empirical section model with smooth stall and compressibility drag.
//!
//! Linear thin-airfoil lift is bent over by an analytic stall limiter near the
//! Mach-derated lift bounds. Drag is a parabolic polar scaled with Reynolds number,
//! plus a post-stall increment and a compressibility-drag rise above the
//! lift-dependent critical Mach number:
//!
//! ```text
//! Cl_lin = Cl_a * PG * (alpha - alpha_0)
//! CLLIM  = dCl_stall * ln((1 + e^((Cl_lin - CLMAX)/dCl_stall)) / (1 + e^((CLMIN - Cl_lin)/dCl_stall)))
//! Cl     = Cl_lin - (1 - Cl_a_stall/Cl_a) * CLLIM
//! Cd     = FAC * (Cd_min + dCd/dCl2 * (Cl - Cl_cdmin)^2) * (Re/Re_ref)^f + 2*DCDX^2 + CDC
//! ```

use crate::error::AeroResult;
use crate::flow::FlowState;
use crate::params::EmpiricalAirfoilParameters;
use crate::CoefficientResult;
use ra_core::compressibility_root;

/// Drag rise at the stall-derating Mach offset.
const CDMSTALL: f64 = 0.1000;
/// Scale of the compressibility drag rise.
const CDMFACTOR: f64 = 10.0;
/// Drop of critical Mach per unit lift away from Cl at minimum drag.
const CLMFACTOR: f64 = 0.25;
/// Exponent of the compressibility drag rise.
const MEXP: f64 = 3.0;
/// Drag rise defining the drag-divergence Mach number.
const CDMDD: f64 = 0.0020;
/// Cap on the limiter exponent, keeps `exp` finite deep in stall.
const EXP_CAP: f64 = 200.0;

/// Multiplier applied to the parabolic profile drag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProfileDragFactor {
    /// Profile drag unaffected by Mach number.
    #[default]
    Unity,
    /// Profile drag amplified by the Prandtl-Glauert factor.
    PrandtlGlauert,
}

/// Every intermediate term of one semi-empirical evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StallEvaluation {
    pub prandtl_glauert: f64,
    pub cl_linear: f64,
    /// Mach-derated upper lift bound
    pub cl_max: f64,
    /// Mach-derated lower lift bound
    pub cl_min: f64,
    /// Stall limiter value, positive past `cl_max`, negative past `cl_min`
    pub cl_limiter: f64,
    pub cl: f64,
    /// Parabolic profile drag including Reynolds scaling and the drag factor
    pub cd_profile: f64,
    pub cd_post_stall: f64,
    pub critical_mach: f64,
    pub cd_compressibility: f64,
    pub cd: f64,
}

impl StallEvaluation {
    pub fn coefficients(&self) -> CoefficientResult {
        CoefficientResult {
            cl: self.cl,
            cd: self.cd,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SemiEmpiricalStallModel {
    params: EmpiricalAirfoilParameters,
    pub drag_factor: ProfileDragFactor,
}

impl SemiEmpiricalStallModel {
    /// Create the model from a validated parameter set.
    pub fn new(params: EmpiricalAirfoilParameters) -> AeroResult<Self> {
        params.validate()?;
        Ok(Self {
            params,
            drag_factor: ProfileDragFactor::default(),
        })
    }

    pub fn with_drag_factor(mut self, drag_factor: ProfileDragFactor) -> Self {
        self.drag_factor = drag_factor;
        self
    }

    pub fn params(&self) -> &EmpiricalAirfoilParameters {
        &self.params
    }

    /// Lift and drag coefficients at the given flow state.
    pub fn evaluate(&self, flow: &FlowState) -> AeroResult<CoefficientResult> {
        Ok(self.evaluate_detailed(flow)?.coefficients())
    }

    /// Full term-by-term evaluation.
    pub fn evaluate_detailed(&self, flow: &FlowState) -> AeroResult<StallEvaluation> {
        let p = &self.params;
        let mach = flow.mach;

        let pg = 1.0 / compressibility_root(mach)?;
        let cl_linear = p.cl_alpha * pg * (flow.alpha - p.alpha_0_lift);

        // Lift bounds derated by Mach
        let dmstall = (CDMSTALL / CDMFACTOR).powf(1.0 / MEXP);
        let mach_margin = (p.mach_crit + dmstall - mach) / CLMFACTOR;
        let clmaxm = mach_margin.max(0.0) + p.cl_at_cd_min;
        let cl_max = p.cl_max.min(clmaxm);
        let clminm = (-mach_margin).min(0.0) + p.cl_at_cd_min;
        let cl_min = p.cl_min.max(clminm);

        // Limiter turns on past either bound
        let ecmax = ((cl_linear - cl_max) / p.cl_incr_to_stall)
            .min(EXP_CAP)
            .exp();
        let ecmin = ((cl_min - cl_linear) / p.cl_incr_to_stall)
            .min(EXP_CAP)
            .exp();
        let cl_limiter = p.cl_incr_to_stall * ((1.0 + ecmax) / (1.0 + ecmin)).ln();

        let fstall = p.cl_alpha_stall / p.cl_alpha;
        let cl = cl_linear - (1.0 - fstall) * cl_limiter;

        let rcorr = flow
            .reynolds_ratio()
            .map_or(1.0, |ratio| ratio.powf(p.re_scaling_exp));
        let fac = match self.drag_factor {
            ProfileDragFactor::Unity => 1.0,
            ProfileDragFactor::PrandtlGlauert => pg,
        };
        let cd_profile =
            fac * (p.cd_min + p.dcd_dcl2 * (cl - p.cl_at_cd_min).powi(2)) * rcorr;

        let dcdx = (1.0 - fstall) * cl_limiter / (pg * p.cl_alpha);
        let cd_post_stall = 2.0 * dcdx * dcdx;

        let dmdd = (CDMDD / CDMFACTOR).powf(1.0 / MEXP);
        let critical_mach = p.mach_crit - CLMFACTOR * (cl - p.cl_at_cd_min).abs() - dmdd;
        let cd_compressibility = if mach < critical_mach {
            0.0
        } else {
            CDMFACTOR * (mach - critical_mach).powf(MEXP)
        };

        Ok(StallEvaluation {
            prandtl_glauert: pg,
            cl_linear,
            cl_max,
            cl_min,
            cl_limiter,
            cl,
            cd_profile,
            cd_post_stall,
            critical_mach,
            cd_compressibility,
            cd: cd_profile + cd_post_stall + cd_compressibility,
        })
    }
}
