//! Piecewise-linear interpolation on ascending axes.
//!
//! Queries outside an axis are held at the edge value (constant extrapolation).

/// Index `i` of the interval `[axis[i], axis[i + 1]]` used for `x`, together with
/// the fractional position inside it. `x` is clamped to the axis range first.
///
/// `axis` must be strictly increasing with at least two points.
fn locate(axis: &[f64], x: f64) -> (usize, f64) {
    let n = axis.len();
    debug_assert!(n >= 2, "interpolation axis needs two points");

    let x = x.clamp(axis[0], axis[n - 1]);
    let i = axis.partition_point(|&a| a <= x).saturating_sub(1).min(n - 2);
    let t = (x - axis[i]) / (axis[i + 1] - axis[i]);
    (i, t)
}

/// Linear interpolation of `fp(xp)` at `x`, holding the end values outside `xp`.
pub fn interp1(x: f64, xp: &[f64], fp: &[f64]) -> f64 {
    debug_assert_eq!(xp.len(), fp.len());
    match xp.len() {
        0 => f64::NAN,
        1 => fp[0],
        _ => {
            let (i, t) = locate(xp, x);
            fp[i] * (1.0 - t) + fp[i + 1] * t
        }
    }
}

/// Bilinear interpolation on a row-major grid `values[iy * xs.len() + ix]`.
pub fn bilinear(x: f64, y: f64, xs: &[f64], ys: &[f64], values: &[f64]) -> f64 {
    debug_assert_eq!(values.len(), xs.len() * ys.len());
    let nx = xs.len();
    let (ix, tx) = locate(xs, x);
    let (iy, ty) = locate(ys, y);

    let f00 = values[iy * nx + ix];
    let f10 = values[iy * nx + ix + 1];
    let f01 = values[(iy + 1) * nx + ix];
    let f11 = values[(iy + 1) * nx + ix + 1];

    let lower = f00 * (1.0 - tx) + f10 * tx;
    let upper = f01 * (1.0 - tx) + f11 * tx;
    lower * (1.0 - ty) + upper * ty
}

/// Find `x` such that the piecewise-linear curve `ys(xs)` equals `target`.
///
/// The first bracketing segment wins. If the curve never reaches `target`, the end
/// point closest to it is returned.
pub fn invert_linear(target: f64, xs: &[f64], ys: &[f64]) -> f64 {
    debug_assert_eq!(xs.len(), ys.len());
    if xs.is_empty() {
        return f64::NAN;
    }

    for i in 0..xs.len().saturating_sub(1) {
        let (y0, y1) = (ys[i] - target, ys[i + 1] - target);
        if y0 == 0.0 {
            return xs[i];
        }
        if y0 * y1 < 0.0 {
            let t = y0 / (y0 - y1);
            return xs[i] + t * (xs[i + 1] - xs[i]);
        }
    }

    let last = xs.len() - 1;
    if (ys[0] - target).abs() <= (ys[last] - target).abs() {
        xs[0]
    } else {
        xs[last]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interp1_inside_and_outside() {
        let xp = [0.0, 1.0, 3.0];
        let fp = [0.0, 10.0, 30.0];
        assert_eq!(interp1(0.5, &xp, &fp), 5.0);
        assert_eq!(interp1(2.0, &xp, &fp), 20.0);
        assert_eq!(interp1(-4.0, &xp, &fp), 0.0);
        assert_eq!(interp1(9.0, &xp, &fp), 30.0);
    }

    #[test]
    fn interp1_exact_at_nodes() {
        let xp = [-2.0, -1.0, 0.5, 4.0];
        let fp = [0.11, -0.37, 2.5, 1.9];
        for (x, f) in xp.iter().zip(fp.iter()) {
            assert_eq!(interp1(*x, &xp, &fp), *f);
        }
    }

    #[test]
    fn bilinear_plane_is_reproduced() {
        let xs = [0.0, 1.0, 2.0];
        let ys = [0.0, 10.0];
        // f = 2x + 0.1y
        let values: Vec<f64> = ys
            .iter()
            .flat_map(|y| xs.iter().map(move |x| 2.0 * x + 0.1 * y))
            .collect();
        let v = bilinear(1.5, 2.5, &xs, &ys, &values);
        assert!((v - (3.0 + 0.25)).abs() < 1e-12);
    }

    #[test]
    fn bilinear_clamps_outside_grid() {
        let xs = [0.0, 1.0];
        let ys = [0.0, 1.0];
        let values = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(bilinear(-5.0, -5.0, &xs, &ys, &values), 1.0);
        assert_eq!(bilinear(5.0, 5.0, &xs, &ys, &values), 4.0);
        assert_eq!(bilinear(5.0, -5.0, &xs, &ys, &values), 2.0);
    }

    #[test]
    fn invert_linear_finds_crossing() {
        let xs = [-6.0, -2.0, 2.0, 6.0];
        let ys = [-0.5, -0.1, 0.3, 0.7];
        let x0 = invert_linear(0.0, &xs, &ys);
        assert!((x0 - (-1.0)).abs() < 1e-12);
    }

    #[test]
    fn invert_linear_without_crossing_returns_nearest_end() {
        let xs = [-6.0, 0.0, 6.0];
        let ys = [0.2, 0.5, 0.9];
        assert_eq!(invert_linear(0.0, &xs, &ys), -6.0);

        let ys = [-0.9, -0.5, -0.2];
        assert_eq!(invert_linear(0.0, &xs, &ys), 6.0);
    }
}
