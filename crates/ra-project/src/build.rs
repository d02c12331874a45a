//! Turning a validated config into an evaluator.

use crate::schema::{AeroConfig, EmpiricalDef, PolarTableDef, ProfileDragDef};
use crate::validate::validate_config;
use crate::{ProjectResult, load_table};
use ra_aero::{
    AeroError, AeroEvaluator, AeroModel, CorrectionFlags, EmpiricalAirfoilParameters,
    EmpiricalParamsBuilder, ModelVariant, ProfileDragFactor, SemiEmpiricalStallModel,
};
use ra_polar::{PolarResult, PolarTable, StationPolar};
use std::path::Path;
use std::sync::Arc;

impl AeroConfig {
    pub fn corrections(&self) -> CorrectionFlags {
        CorrectionFlags {
            mach: self.mach_correction,
            reynolds: self.reynolds_correction,
        }
    }

    /// Build the evaluator. A relative `table_path` is resolved against `base_dir`.
    pub fn build(&self, base_dir: Option<&Path>) -> ProjectResult<AeroEvaluator> {
        let variant = validate_config(self)?;
        let corrections = self.corrections();

        let model = match variant {
            ModelVariant::FlatPlate => AeroModel::FlatPlate,
            ModelVariant::TabulatedPolar => {
                let def = match (&self.table, &self.table_path) {
                    (Some(def), _) => def.clone(),
                    (None, Some(path)) => {
                        let path = match base_dir {
                            Some(dir) if path.is_relative() => dir.join(path),
                            _ => path.clone(),
                        };
                        load_table(&path)?
                    }
                    (None, None) => {
                        return Err(AeroError::Validation {
                            what: "xfoil_table requires a polar table",
                        }
                        .into());
                    }
                };
                AeroModel::TabulatedPolar(Arc::new(def.to_table()?))
            }
            ModelVariant::SemiEmpirical => {
                let params = self.empirical.clone().unwrap_or_default().to_params()?;
                let model = SemiEmpiricalStallModel::new(params)?
                    .with_drag_factor(self.profile_drag.into());
                AeroModel::SemiEmpirical(model)
            }
        };

        Ok(AeroEvaluator::new(model, corrections))
    }
}

impl EmpiricalDef {
    /// All eleven parameters, angles converted to radians.
    pub fn to_params(&self) -> Result<EmpiricalAirfoilParameters, AeroError> {
        EmpiricalParamsBuilder {
            alpha_0_lift: self.alpha_0_lift_deg.map(f64::to_radians),
            cl_alpha: self.cl_alpha,
            cl_alpha_stall: self.cl_alpha_stall,
            cl_max: self.cl_max,
            cl_min: self.cl_min,
            cl_incr_to_stall: self.cl_incr_to_stall,
            cd_min: self.cd_min,
            cl_at_cd_min: self.cl_at_cd_min,
            dcd_dcl2: self.dcd_dcl2,
            mach_crit: self.mach_crit,
            re_scaling_exp: self.re_scaling_exp,
        }
        .build()
    }
}

impl PolarTableDef {
    pub fn to_table(&self) -> PolarResult<PolarTable> {
        match self {
            PolarTableDef::Grid {
                alpha_deg,
                span_fraction,
                cl,
                cd,
            } => PolarTable::from_degrees(
                alpha_deg.clone(),
                span_fraction.clone(),
                cl.clone(),
                cd.clone(),
            ),
            PolarTableDef::Stations {
                alpha_deg,
                stations,
            } => {
                let polars = stations
                    .iter()
                    .map(|s| StationPolar::new(s.alpha_deg.clone(), s.cl.clone(), s.cd.clone()))
                    .collect::<PolarResult<Vec<_>>>()?;
                let span = stations.iter().map(|s| s.span_fraction).collect();
                PolarTable::from_station_polars(alpha_deg.clone(), span, &polars)
            }
        }
    }
}

impl From<ProfileDragDef> for ProfileDragFactor {
    fn from(def: ProfileDragDef) -> Self {
        match def {
            ProfileDragDef::Unity => ProfileDragFactor::Unity,
            ProfileDragDef::PrandtlGlauert => ProfileDragFactor::PrandtlGlauert,
        }
    }
}
