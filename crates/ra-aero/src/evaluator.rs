//! The aerodynamic evaluator: one model variant fixed at construction.

use crate::error::AeroResult;
use crate::model::{AeroModel, CorrectionFlags, ModelVariant};
use crate::params::EmpiricalAirfoilParameters;
use crate::stall::SemiEmpiricalStallModel;
use ra_polar::PolarTable;
use std::sync::Arc;

/// Section lift and drag coefficients.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoefficientResult {
    pub cl: f64,
    pub cd: f64,
}

/// Linear-range lift properties of a section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiftProperties {
    /// Lift-curve slope [1/rad]
    pub cl_alpha: f64,
    /// Zero-lift angle [rad]
    pub alpha_0_lift: f64,
}

/// Pointwise aerodynamic coefficient oracle for blade stations.
///
/// Holds only read-only data, so a single evaluator can be shared across threads.
#[derive(Debug, Clone)]
pub struct AeroEvaluator {
    model: AeroModel,
    corrections: CorrectionFlags,
}

impl AeroEvaluator {
    pub fn new(model: AeroModel, corrections: CorrectionFlags) -> Self {
        tracing::debug!(
            method = %model.variant(),
            mach_correction = corrections.mach,
            reynolds_correction = corrections.reynolds,
            "aerodynamic evaluator created"
        );
        Self { model, corrections }
    }

    pub fn flat_plate(corrections: CorrectionFlags) -> Self {
        Self::new(AeroModel::FlatPlate, corrections)
    }

    pub fn tabulated(table: Arc<PolarTable>, corrections: CorrectionFlags) -> Self {
        Self::new(AeroModel::TabulatedPolar(table), corrections)
    }

    /// Semi-empirical evaluator. Correction flags do not affect this model.
    pub fn semi_empirical(
        params: EmpiricalAirfoilParameters,
        corrections: CorrectionFlags,
    ) -> AeroResult<Self> {
        let model = SemiEmpiricalStallModel::new(params)?;
        Ok(Self::new(AeroModel::SemiEmpirical(model), corrections))
    }

    pub fn model(&self) -> &AeroModel {
        &self.model
    }

    pub fn variant(&self) -> ModelVariant {
        self.model.variant()
    }

    pub fn corrections(&self) -> CorrectionFlags {
        self.corrections
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn evaluator_is_shareable() {
        assert_send_sync::<AeroEvaluator>();
    }

    #[test]
    fn variant_matches_constructor() {
        let ev = AeroEvaluator::flat_plate(CorrectionFlags::ALL);
        assert_eq!(ev.variant(), ModelVariant::FlatPlate);
        assert_eq!(ev.corrections(), CorrectionFlags::ALL);
    }
}
