use ra_aero::{
    AeroError, AeroEvaluator, CorrectionFlags, EmpiricalAirfoilParameters, EmpiricalParamsBuilder,
    FlowState, ModelVariant, SemiEmpiricalStallModel,
};
use ra_polar::{PolarTable, StationPolar};
use std::f64::consts::PI;
use std::sync::Arc;

fn representative_params() -> EmpiricalAirfoilParameters {
    EmpiricalParamsBuilder {
        alpha_0_lift: Some(0.0),
        cl_alpha: Some(2.0 * PI),
        cl_alpha_stall: Some(0.1),
        cl_max: Some(1.5),
        cl_min: Some(-0.5),
        cl_incr_to_stall: Some(0.1),
        cd_min: Some(0.013),
        cl_at_cd_min: Some(0.0),
        dcd_dcl2: Some(0.004),
        mach_crit: Some(0.8),
        re_scaling_exp: Some(-0.15),
    }
    .build()
    .unwrap()
}

#[test]
fn flat_plate_small_angle() {
    let aero = AeroEvaluator::flat_plate(CorrectionFlags::NONE);
    let flow = FlowState::new(0.1, 0.0, 1e6, 1e6).unwrap();
    let c = aero.coefficients(&flow, None).unwrap();
    assert!((c.cl - 0.6283).abs() < 1e-4);
    assert_eq!(c.cd, 0.02);
}

#[test]
fn flat_plate_large_angle_clamps() {
    let aero = AeroEvaluator::flat_plate(CorrectionFlags::NONE);
    let flow = FlowState::new(1.0, 0.0, 1e6, 1e6).unwrap();
    let c = aero.coefficients(&flow, None).unwrap();
    assert_eq!(c.cl, 3.5);
    assert_eq!(c.cd, 0.02);
}

#[test]
fn semi_empirical_at_zero_angle_is_near_minimum_drag() {
    let aero = AeroEvaluator::semi_empirical(representative_params(), CorrectionFlags::ALL)
        .unwrap();
    let flow = FlowState::new(0.0, 0.0, 1e6, 1e6).unwrap();
    let c = aero.coefficients(&flow, None).unwrap();
    assert!(c.cl.abs() < 1e-3, "cl = {}", c.cl);
    assert!((c.cd - 0.013).abs() < 1e-6, "cd = {}", c.cd);
}

#[test]
fn semi_empirical_terms_are_non_negative() {
    let model = SemiEmpiricalStallModel::new(representative_params()).unwrap();
    for alpha_deg in [-30.0, -10.0, 0.0, 5.0, 12.0, 25.0] {
        for mach in [0.0, 0.4, 0.75, 0.9] {
            let flow = FlowState::from_degrees(alpha_deg, mach, 4e5, 1e6).unwrap();
            let eval = model.evaluate_detailed(&flow).unwrap();
            assert!(eval.cd_post_stall >= 0.0);
            assert!(eval.cd_compressibility >= 0.0);
            assert!(eval.cd >= eval.cd_profile);
        }
    }
}

#[test]
fn tabulated_evaluator_from_station_polars() {
    let alphas: Vec<f64> = (-15..=15).map(|a| a as f64).collect();
    let station = |slope: f64, zero_lift_deg: f64| {
        let cl = alphas.iter().map(|a| slope * (a - zero_lift_deg)).collect();
        let cd = alphas.iter().map(|a| 0.01 + 2e-4 * a * a).collect();
        StationPolar::new(alphas.clone(), cl, cd).unwrap()
    };
    let table = PolarTable::from_station_polars(
        (-20..=20).map(|a| a as f64).collect(),
        vec![0.25, 0.75],
        &[station(0.11, -2.0), station(0.10, -1.0)],
    )
    .unwrap();
    let aero = AeroEvaluator::tabulated(Arc::new(table), CorrectionFlags::NONE);
    assert_eq!(aero.variant(), ModelVariant::TabulatedPolar);

    let flow = FlowState::from_degrees(4.0, 0.2, 1e6, 1e6).unwrap();

    // Grid node: exact stored value
    let c = aero.coefficients(&flow, Some(0.25)).unwrap();
    assert!((c.cl - 0.66).abs() < 1e-12);
    assert!((c.cd - (0.01 + 2e-4 * 16.0)).abs() < 1e-12);

    let props = aero.lift_properties(&flow, Some(0.75)).unwrap();
    assert!((props.cl_alpha - 0.10 * 180.0 / PI).abs() < 1e-9);
    assert!((props.alpha_0_lift - (-1.0_f64).to_radians()).abs() < 1e-9);

    let err = aero.coefficients(&flow, None).unwrap_err();
    assert!(matches!(err, AeroError::Validation { .. }));
}

#[test]
fn evaluator_shared_across_threads() {
    let aero = Arc::new(
        AeroEvaluator::semi_empirical(representative_params(), CorrectionFlags::NONE).unwrap(),
    );
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let aero = Arc::clone(&aero);
            std::thread::spawn(move || {
                let flow = FlowState::from_degrees(i as f64 * 3.0, 0.3, 5e5, 1e6).unwrap();
                aero.coefficients(&flow, None).unwrap()
            })
        })
        .collect();

    for (i, h) in handles.into_iter().enumerate() {
        let from_thread = h.join().unwrap();
        let flow = FlowState::from_degrees(i as f64 * 3.0, 0.3, 5e5, 1e6).unwrap();
        assert_eq!(from_thread, aero.coefficients(&flow, None).unwrap());
    }
}
