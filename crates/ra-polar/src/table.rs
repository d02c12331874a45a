//! Two-dimensional polar table over angle of attack and span fraction.

use crate::error::{PolarError, PolarResult};
use crate::interp::bilinear;

/// Lift and drag coefficient grids sampled over (angle of attack, span fraction).
///
/// Angles are stored in radians. Grids are row-major with one row per span
/// station, so `cl[i_span * n_alpha + i_alpha]`. Queries outside either axis use
/// the nearest edge value.
#[derive(Debug, Clone, PartialEq)]
pub struct PolarTable {
    alpha_rad: Vec<f64>,
    span_fraction: Vec<f64>,
    cl: Vec<f64>,
    cd: Vec<f64>,
}

impl PolarTable {
    /// Build a table from an angle axis in radians.
    ///
    /// `cl` and `cd` hold one row per span station, each row sampled on `alpha_rad`.
    pub fn new(
        alpha_rad: Vec<f64>,
        span_fraction: Vec<f64>,
        cl: Vec<Vec<f64>>,
        cd: Vec<Vec<f64>>,
    ) -> PolarResult<Self> {
        check_axis(&alpha_rad, "alpha")?;
        check_axis(&span_fraction, "span_fraction")?;
        let cl = flatten_grid(cl, alpha_rad.len(), span_fraction.len(), "cl")?;
        let cd = flatten_grid(cd, alpha_rad.len(), span_fraction.len(), "cd")?;

        Ok(Self {
            alpha_rad,
            span_fraction,
            cl,
            cd,
        })
    }

    /// Build a table from an angle axis in degrees, the usual polar-file convention.
    pub fn from_degrees(
        alpha_deg: Vec<f64>,
        span_fraction: Vec<f64>,
        cl: Vec<Vec<f64>>,
        cd: Vec<Vec<f64>>,
    ) -> PolarResult<Self> {
        let alpha_rad = alpha_deg.into_iter().map(f64::to_radians).collect();
        Self::new(alpha_rad, span_fraction, cl, cd)
    }

    /// Angle-of-attack axis [rad].
    pub fn alpha_rad(&self) -> &[f64] {
        &self.alpha_rad
    }

    pub fn span_fraction(&self) -> &[f64] {
        &self.span_fraction
    }

    /// Grid size as (n_alpha, n_span).
    pub fn dims(&self) -> (usize, usize) {
        (self.alpha_rad.len(), self.span_fraction.len())
    }

    /// Lift coefficient at `alpha` [rad] and span fraction `r`.
    pub fn cl(&self, alpha: f64, r: f64) -> f64 {
        bilinear(alpha, r, &self.alpha_rad, &self.span_fraction, &self.cl)
    }

    /// Drag coefficient at `alpha` [rad] and span fraction `r`.
    pub fn cd(&self, alpha: f64, r: f64) -> f64 {
        bilinear(alpha, r, &self.alpha_rad, &self.span_fraction, &self.cd)
    }

    /// Lift coefficient with the angle given in degrees.
    pub fn cl_deg(&self, alpha_deg: f64, r: f64) -> f64 {
        self.cl(alpha_deg.to_radians(), r)
    }
}

fn check_axis(axis: &[f64], what: &'static str) -> PolarResult<()> {
    if axis.len() < 2 {
        return Err(PolarError::TooFewPoints {
            what,
            min: 2,
            len: axis.len(),
        });
    }
    if axis.iter().any(|v| !v.is_finite()) {
        return Err(PolarError::NonFinite { what });
    }
    if let Some(index) = axis.windows(2).position(|w| w[1] <= w[0]) {
        return Err(PolarError::NonMonotonic {
            what,
            index: index + 1,
        });
    }
    Ok(())
}

fn flatten_grid(
    rows: Vec<Vec<f64>>,
    n_alpha: usize,
    n_span: usize,
    what: &'static str,
) -> PolarResult<Vec<f64>> {
    if rows.len() != n_span {
        return Err(PolarError::ShapeMismatch {
            what,
            expected: n_span,
            actual: rows.len(),
        });
    }

    let mut flat = Vec::with_capacity(n_alpha * n_span);
    for row in rows {
        if row.len() != n_alpha {
            return Err(PolarError::ShapeMismatch {
                what,
                expected: n_alpha,
                actual: row.len(),
            });
        }
        if row.iter().any(|v| !v.is_finite()) {
            return Err(PolarError::NonFinite { what });
        }
        flat.extend(row);
    }
    Ok(flat)
}
