use crate::RaError;

/// Floating point type used throughout system
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, RaError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(RaError::NonFinite { what, value: v })
    }
}

/// Subsonic compressibility root `sqrt(1 - M^2)`.
///
/// Undefined at and above M = 1, so those Mach numbers are rejected rather than
/// clamped.
pub fn compressibility_root(mach: Real) -> Result<Real, RaError> {
    let mach = ensure_finite(mach, "mach")?;
    if !(0.0..1.0).contains(&mach) {
        return Err(RaError::OutOfDomain {
            what: "mach (Prandtl-Glauert requires 0 <= M < 1)",
            value: mach,
        });
    }
    Ok((1.0 - mach * mach).sqrt())
}

/// `n` evenly spaced points over `[start, end]`, endpoints included.
pub fn linspace(start: Real, end: Real, n: usize) -> Vec<Real> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let delta = (end - start) / (n - 1) as Real;
            let mut points: Vec<Real> = (0..n).map(|i| start + i as Real * delta).collect();
            // Ensure exact endpoint
            points[n - 1] = end;
            points
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn compressibility_root_in_unit_interval(mach in 0.0_f64..0.999) {
            let beta = compressibility_root(mach).unwrap();
            prop_assert!(beta > 0.0 && beta <= 1.0);
        }

        #[test]
        fn linspace_is_increasing(start in -10.0_f64..0.0, width in 0.1_f64..20.0, n in 2_usize..50) {
            let pts = linspace(start, start + width, n);
            prop_assert_eq!(pts.len(), n);
            prop_assert!(pts.windows(2).all(|w| w[1] > w[0]));
        }
    }
}
