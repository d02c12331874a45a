//! Raw per-station polars and their resampling onto a common angle axis.

use crate::error::{PolarError, PolarResult};
use crate::interp::interp1;
use crate::table::PolarTable;

/// A raw polar for one blade station, as delivered by the polar provider.
///
/// Angles are in degrees and need not be evenly spaced; points where the provider
/// failed to converge are simply absent.
#[derive(Debug, Clone, PartialEq)]
pub struct StationPolar {
    pub alpha_deg: Vec<f64>,
    pub cl: Vec<f64>,
    pub cd: Vec<f64>,
}

impl StationPolar {
    pub fn new(alpha_deg: Vec<f64>, cl: Vec<f64>, cd: Vec<f64>) -> PolarResult<Self> {
        if alpha_deg.is_empty() {
            return Err(PolarError::TooFewPoints {
                what: "station alpha",
                min: 1,
                len: 0,
            });
        }
        for (what, column) in [("station cl", &cl), ("station cd", &cd)] {
            if column.len() != alpha_deg.len() {
                return Err(PolarError::ShapeMismatch {
                    what,
                    expected: alpha_deg.len(),
                    actual: column.len(),
                });
            }
        }
        if alpha_deg
            .iter()
            .chain(cl.iter())
            .chain(cd.iter())
            .any(|v| !v.is_finite())
        {
            return Err(PolarError::NonFinite { what: "station polar" });
        }
        if let Some(index) = alpha_deg.windows(2).position(|w| w[1] <= w[0]) {
            return Err(PolarError::NonMonotonic {
                what: "station alpha",
                index: index + 1,
            });
        }

        Ok(Self { alpha_deg, cl, cd })
    }

    /// Resample onto `alpha_axis_deg`, holding end values outside the polar.
    pub fn resample(&self, alpha_axis_deg: &[f64]) -> (Vec<f64>, Vec<f64>) {
        let cl = alpha_axis_deg
            .iter()
            .map(|&a| interp1(a, &self.alpha_deg, &self.cl))
            .collect();
        let cd = alpha_axis_deg
            .iter()
            .map(|&a| interp1(a, &self.alpha_deg, &self.cd))
            .collect();
        (cl, cd)
    }
}

impl PolarTable {
    /// Assemble a table from one raw polar per blade station.
    ///
    /// Each station is resampled onto `alpha_axis_deg`; `span_fraction[i]` is the
    /// blade position of `stations[i]`.
    pub fn from_station_polars(
        alpha_axis_deg: Vec<f64>,
        span_fraction: Vec<f64>,
        stations: &[StationPolar],
    ) -> PolarResult<Self> {
        if stations.len() != span_fraction.len() {
            return Err(PolarError::ShapeMismatch {
                what: "stations",
                expected: span_fraction.len(),
                actual: stations.len(),
            });
        }

        let (cl, cd): (Vec<_>, Vec<_>) = stations
            .iter()
            .map(|s| s.resample(&alpha_axis_deg))
            .unzip();

        Self::from_degrees(alpha_axis_deg, span_fraction, cl, cd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resample_holds_ends() {
        let polar = StationPolar::new(
            vec![-2.0, 0.0, 2.0],
            vec![-0.2, 0.0, 0.2],
            vec![0.011, 0.010, 0.011],
        )
        .unwrap();
        let (cl, cd) = polar.resample(&[-5.0, -1.0, 1.0, 5.0]);
        assert_eq!(cl, vec![-0.2, -0.1, 0.1, 0.2]);
        assert_eq!(cd[0], 0.011);
        assert_eq!(cd[3], 0.011);
    }

    #[test]
    fn rejects_ragged_columns() {
        let err = StationPolar::new(vec![0.0, 1.0], vec![0.0], vec![0.01, 0.01]).unwrap_err();
        assert!(matches!(
            err,
            PolarError::ShapeMismatch {
                what: "station cl",
                ..
            }
        ));
    }

    #[test]
    fn rejects_empty_polar() {
        let err = StationPolar::new(vec![], vec![], vec![]).unwrap_err();
        assert!(matches!(err, PolarError::TooFewPoints { min: 1, .. }));
    }

    #[test]
    fn station_count_must_match_span_axis() {
        let polar = StationPolar::new(vec![0.0], vec![0.1], vec![0.01]).unwrap();
        let err = PolarTable::from_station_polars(vec![-1.0, 1.0], vec![0.2, 0.8], &[polar])
            .unwrap_err();
        assert!(matches!(
            err,
            PolarError::ShapeMismatch {
                what: "stations",
                expected: 2,
                actual: 1
            }
        ));
    }
}
