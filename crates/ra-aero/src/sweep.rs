//! Angle-of-attack sweeps producing a section polar from an evaluator.

use crate::error::{AeroError, AeroResult};
use crate::evaluator::{AeroEvaluator, CoefficientResult};
use crate::flow::FlowState;
use ra_core::{Tolerances, linspace, nearly_equal};
use rayon::prelude::*;

/// Evenly spaced angle-of-attack sweep, angles in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlphaSweep {
    pub start: f64,
    pub end: f64,
    pub num_points: usize,
}

impl AlphaSweep {
    pub fn new(start: f64, end: f64, num_points: usize) -> AeroResult<Self> {
        if num_points < 2 {
            return Err(AeroError::Configuration {
                what: format!("sweep must have at least 2 points, got {num_points}"),
            });
        }
        if !start.is_finite()
            || !end.is_finite()
            || nearly_equal(start, end, Tolerances::default())
        {
            return Err(AeroError::Configuration {
                what: format!("sweep bounds must be finite and distinct ({start}, {end})"),
            });
        }
        Ok(Self {
            start,
            end,
            num_points,
        })
    }

    pub fn from_degrees(start_deg: f64, end_deg: f64, num_points: usize) -> AeroResult<Self> {
        Self::new(start_deg.to_radians(), end_deg.to_radians(), num_points)
    }

    pub fn generate_points(&self) -> Vec<f64> {
        linspace(self.start, self.end, self.num_points)
    }
}

/// Coefficients along a sweep; failed points hold their error.
#[derive(Debug, Clone)]
pub struct SweepResult {
    pub alpha: Vec<f64>,
    pub points: Vec<AeroResult<CoefficientResult>>,
}

impl SweepResult {
    pub fn num_successful(&self) -> usize {
        self.points.iter().filter(|p| p.is_ok()).count()
    }

    /// (alpha, result) pairs for the points that evaluated.
    pub fn successful(&self) -> impl Iterator<Item = (f64, CoefficientResult)> + '_ {
        self.alpha
            .iter()
            .zip(self.points.iter())
            .filter_map(|(a, p)| p.as_ref().ok().map(|c| (*a, *c)))
    }
}

/// Evaluate `evaluator` at every sweep angle, holding the rest of `flow` fixed.
///
/// Points are evaluated in parallel; the evaluator is only read.
pub fn run_alpha_sweep(
    evaluator: &AeroEvaluator,
    sweep: &AlphaSweep,
    flow: &FlowState,
    span_fraction: Option<f64>,
) -> SweepResult {
    let alpha = sweep.generate_points();
    let points: Vec<_> = alpha
        .par_iter()
        .map(|&a| {
            let point = FlowState { alpha: a, ..*flow };
            evaluator.coefficients(&point, span_fraction)
        })
        .collect();

    SweepResult { alpha, points }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CorrectionFlags;
    use std::f64::consts::PI;

    #[test]
    fn sweep_rejects_degenerate_definitions() {
        assert!(AlphaSweep::new(0.0, 1.0, 1).is_err());
        assert!(AlphaSweep::new(0.5, 0.5, 10).is_err());
        assert!(AlphaSweep::new(f64::NAN, 0.5, 10).is_err());
    }

    #[test]
    fn flat_plate_sweep_is_ordered() {
        let ev = AeroEvaluator::flat_plate(CorrectionFlags::NONE);
        let sweep = AlphaSweep::from_degrees(-10.0, 10.0, 21).unwrap();
        let flow = FlowState::new(0.0, 0.0, 1e6, 1e6).unwrap();

        let result = run_alpha_sweep(&ev, &sweep, &flow, None);
        assert_eq!(result.num_successful(), 21);

        let pts: Vec<_> = result.successful().collect();
        assert!((pts[20].0 - 10.0_f64.to_radians()).abs() < 1e-12);
        assert!((pts[20].1.cl - 2.0 * PI * 10.0_f64.to_radians()).abs() < 1e-12);
        assert!(pts.windows(2).all(|w| w[1].1.cl >= w[0].1.cl));
    }

    #[test]
    fn failed_points_are_kept_in_place() {
        // Sonic flow fails at every angle for the flat plate
        let ev = AeroEvaluator::flat_plate(CorrectionFlags::NONE);
        let sweep = AlphaSweep::new(-0.1, 0.1, 5).unwrap();
        let flow = FlowState::new(0.0, 1.0, 1e6, 1e6).unwrap();

        let result = run_alpha_sweep(&ev, &sweep, &flow, None);
        assert_eq!(result.points.len(), 5);
        assert_eq!(result.num_successful(), 0);
    }
}
