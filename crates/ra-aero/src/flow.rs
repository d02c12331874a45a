//! Flow conditions at a blade station.

use crate::error::{AeroError, AeroResult};
use ra_core::constants::MACH_ADVISORY;
use ra_core::{Angle, to_radians};

/// Local flow state for a single evaluation.
///
/// The angle of attack is in radians. Reynolds numbers are dimensionless; a
/// non-positive `reynolds` disables every Reynolds-number drag scaling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowState {
    /// Angle of attack [rad]
    pub alpha: f64,
    /// Mach number [-]
    pub mach: f64,
    /// Local Reynolds number [-]
    pub reynolds: f64,
    /// Reynolds number the polars or empirical drag data refer to [-]
    pub reynolds_ref: f64,
}

impl FlowState {
    pub fn new(alpha: f64, mach: f64, reynolds: f64, reynolds_ref: f64) -> AeroResult<Self> {
        let flow = Self {
            alpha,
            mach,
            reynolds,
            reynolds_ref,
        };
        flow.validate()?;
        Ok(flow)
    }

    /// Same as [`FlowState::new`] with the angle given in degrees.
    pub fn from_degrees(
        alpha_deg: f64,
        mach: f64,
        reynolds: f64,
        reynolds_ref: f64,
    ) -> AeroResult<Self> {
        Self::new(alpha_deg.to_radians(), mach, reynolds, reynolds_ref)
    }

    pub fn from_angle(
        alpha: Angle,
        mach: f64,
        reynolds: f64,
        reynolds_ref: f64,
    ) -> AeroResult<Self> {
        Self::new(to_radians(alpha), mach, reynolds, reynolds_ref)
    }

    /// Check the state is usable by every model.
    pub fn validate(&self) -> AeroResult<()> {
        for (what, value) in [
            ("angle of attack", self.alpha),
            ("mach", self.mach),
            ("reynolds", self.reynolds),
            ("reference reynolds", self.reynolds_ref),
        ] {
            if !value.is_finite() {
                return Err(AeroError::Domain { what, value });
            }
        }
        if self.mach < 0.0 {
            return Err(AeroError::Domain {
                what: "mach",
                value: self.mach,
            });
        }
        if self.reynolds_ref <= 0.0 {
            return Err(AeroError::Domain {
                what: "reference reynolds",
                value: self.reynolds_ref,
            });
        }
        Ok(())
    }

    /// Ratio of local to reference Reynolds number, `None` when `reynolds <= 0`.
    pub fn reynolds_ratio(&self) -> Option<f64> {
        (self.reynolds > 0.0).then(|| self.reynolds / self.reynolds_ref)
    }

    /// Whether lift predictions are past the accuracy limit of the models.
    pub fn exceeds_mach_advisory(&self) -> bool {
        self.mach > MACH_ADVISORY
    }
}
