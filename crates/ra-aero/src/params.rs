//! Empirical airfoil parameters for the semi-empirical stall model.

use crate::error::{AeroError, AeroResult};

/// The eleven section parameters of the semi-empirical model.
///
/// Angles are in radians and the lift-curve slopes per radian.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmpiricalAirfoilParameters {
    /// Zero-lift angle [rad]
    pub alpha_0_lift: f64,
    /// Lift-curve slope in the linear range [1/rad]
    pub cl_alpha: f64,
    /// Lift-curve slope after stall [1/rad]
    pub cl_alpha_stall: f64,
    pub cl_max: f64,
    pub cl_min: f64,
    /// Lift increment over which the stall transition takes place
    pub cl_incr_to_stall: f64,
    pub cd_min: f64,
    pub cl_at_cd_min: f64,
    /// Curvature of the drag polar, dCd/d(Cl^2)
    pub dcd_dcl2: f64,
    pub mach_crit: f64,
    /// Exponent of the (Re/Re_ref) profile-drag scaling
    pub re_scaling_exp: f64,
}

impl EmpiricalAirfoilParameters {
    /// Check the parameter set can be evaluated.
    pub fn validate(&self) -> AeroResult<()> {
        for (name, value) in self.named_values() {
            if !value.is_finite() {
                return Err(AeroError::Configuration {
                    what: format!("empirical parameter {name} is not finite ({value})"),
                });
            }
        }
        if self.cl_alpha == 0.0 {
            return Err(AeroError::Configuration {
                what: "empirical parameter cl_alpha must be non-zero".into(),
            });
        }
        if self.cl_incr_to_stall <= 0.0 {
            return Err(AeroError::Configuration {
                what: format!(
                    "empirical parameter cl_incr_to_stall must be positive ({})",
                    self.cl_incr_to_stall
                ),
            });
        }
        Ok(())
    }

    fn named_values(&self) -> [(&'static str, f64); 11] {
        [
            ("alpha_0_lift", self.alpha_0_lift),
            ("cl_alpha", self.cl_alpha),
            ("cl_alpha_stall", self.cl_alpha_stall),
            ("cl_max", self.cl_max),
            ("cl_min", self.cl_min),
            ("cl_incr_to_stall", self.cl_incr_to_stall),
            ("cd_min", self.cd_min),
            ("cl_at_cd_min", self.cl_at_cd_min),
            ("dcd_dcl2", self.dcd_dcl2),
            ("mach_crit", self.mach_crit),
            ("re_scaling_exp", self.re_scaling_exp),
        ]
    }
}

/// Partially specified parameter set, as read from user input.
///
/// [`EmpiricalParamsBuilder::build`] succeeds only when every field is present.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EmpiricalParamsBuilder {
    pub alpha_0_lift: Option<f64>,
    pub cl_alpha: Option<f64>,
    pub cl_alpha_stall: Option<f64>,
    pub cl_max: Option<f64>,
    pub cl_min: Option<f64>,
    pub cl_incr_to_stall: Option<f64>,
    pub cd_min: Option<f64>,
    pub cl_at_cd_min: Option<f64>,
    pub dcd_dcl2: Option<f64>,
    pub mach_crit: Option<f64>,
    pub re_scaling_exp: Option<f64>,
}

impl EmpiricalParamsBuilder {
    pub fn build(&self) -> AeroResult<EmpiricalAirfoilParameters> {
        let fields = [
            ("alpha_0_lift", self.alpha_0_lift),
            ("cl_alpha", self.cl_alpha),
            ("cl_alpha_stall", self.cl_alpha_stall),
            ("cl_max", self.cl_max),
            ("cl_min", self.cl_min),
            ("cl_incr_to_stall", self.cl_incr_to_stall),
            ("cd_min", self.cd_min),
            ("cl_at_cd_min", self.cl_at_cd_min),
            ("dcd_dcl2", self.dcd_dcl2),
            ("mach_crit", self.mach_crit),
            ("re_scaling_exp", self.re_scaling_exp),
        ];
        let missing: Vec<&str> = fields
            .iter()
            .filter(|(_, v)| v.is_none())
            .map(|(name, _)| *name)
            .collect();
        if !missing.is_empty() {
            return Err(AeroError::Configuration {
                what: format!(
                    "semi_empirical requires all eleven parameters, missing: {}",
                    missing.join(", ")
                ),
            });
        }

        let [
            alpha_0_lift,
            cl_alpha,
            cl_alpha_stall,
            cl_max,
            cl_min,
            cl_incr_to_stall,
            cd_min,
            cl_at_cd_min,
            dcd_dcl2,
            mach_crit,
            re_scaling_exp,
        ] = fields.map(|(_, v)| v.unwrap_or_default());

        let params = EmpiricalAirfoilParameters {
            alpha_0_lift,
            cl_alpha,
            cl_alpha_stall,
            cl_max,
            cl_min,
            cl_incr_to_stall,
            cd_min,
            cl_at_cd_min,
            dcd_dcl2,
            mach_crit,
            re_scaling_exp,
        };
        params.validate()?;
        Ok(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> EmpiricalParamsBuilder {
        EmpiricalParamsBuilder {
            alpha_0_lift: Some(0.0),
            cl_alpha: Some(6.28),
            cl_alpha_stall: Some(0.1),
            cl_max: Some(1.5),
            cl_min: Some(-0.5),
            cl_incr_to_stall: Some(0.1),
            cd_min: Some(0.013),
            cl_at_cd_min: Some(0.5),
            dcd_dcl2: Some(0.004),
            mach_crit: Some(0.8),
            re_scaling_exp: Some(-0.15),
        }
    }

    #[test]
    fn complete_set_builds() {
        let params = complete().build().unwrap();
        assert_eq!(params.cl_max, 1.5);
        assert_eq!(params.re_scaling_exp, -0.15);
    }

    #[test]
    fn partial_set_names_missing_fields() {
        let mut builder = complete();
        builder.cd_min = None;
        builder.mach_crit = None;
        let err = builder.build().unwrap_err();
        let AeroError::Configuration { what } = err else {
            panic!("expected configuration error");
        };
        assert!(what.contains("cd_min"));
        assert!(what.contains("mach_crit"));
        assert!(!what.contains("cl_max"));
    }

    #[test]
    fn empty_set_is_rejected() {
        assert!(matches!(
            EmpiricalParamsBuilder::default().build(),
            Err(AeroError::Configuration { .. })
        ));
    }

    #[test]
    fn non_positive_stall_increment_is_rejected() {
        let mut builder = complete();
        builder.cl_incr_to_stall = Some(0.0);
        assert!(builder.build().is_err());
    }

    #[test]
    fn zero_lift_slope_is_rejected() {
        let mut builder = complete();
        builder.cl_alpha = Some(0.0);
        assert!(builder.build().is_err());
    }
}
