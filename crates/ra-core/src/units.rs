// ra-core/src/units.rs

use uom::si::f64::Angle as UomAngle;

// Public canonical unit types (SI, f64)
pub type Angle = UomAngle;

#[inline]
pub fn rad(v: f64) -> Angle {
    use uom::si::angle::radian;
    Angle::new::<radian>(v)
}

#[inline]
pub fn deg(v: f64) -> Angle {
    use uom::si::angle::degree;
    Angle::new::<degree>(v)
}

#[inline]
pub fn to_radians(a: Angle) -> f64 {
    use uom::si::angle::radian;
    a.get::<radian>()
}

#[inline]
pub fn to_degrees(a: Angle) -> f64 {
    use uom::si::angle::degree;
    a.get::<degree>()
}

pub mod constants {
    /// Thin-airfoil lift-curve slope [1/rad].
    pub const THIN_AIRFOIL_CL_ALPHA: f64 = 2.0 * std::f64::consts::PI;

    /// Mach number above which the small-disturbance lift models overpredict lift.
    pub const MACH_ADVISORY: f64 = 0.7;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degree_radian_round_trip() {
        let a = deg(180.0);
        assert!((to_radians(a) - std::f64::consts::PI).abs() < 1e-12);
        assert!((to_degrees(rad(std::f64::consts::FRAC_PI_2)) - 90.0).abs() < 1e-9);
    }

    #[test]
    fn thin_airfoil_slope() {
        assert!((constants::THIN_AIRFOIL_CL_ALPHA - 6.283_185_307).abs() < 1e-9);
    }
}
