use ra_aero::{FlowState, ModelVariant};
use ra_project::load_evaluator;
use std::path::PathBuf;

fn config_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../configs")
        .join(name)
}

#[test]
fn shipped_configs_build() {
    for (name, variant) in [
        ("flat_plate.yaml", ModelVariant::FlatPlate),
        ("xfoil_table.yaml", ModelVariant::TabulatedPolar),
        ("semi_empirical.yaml", ModelVariant::SemiEmpirical),
    ] {
        let aero = load_evaluator(&config_path(name))
            .unwrap_or_else(|e| panic!("{name} failed to load: {e}"));
        assert_eq!(aero.variant(), variant, "{name}");

        let flow = FlowState::from_degrees(4.0, 0.3, 8e5, 1e6).unwrap();
        let c = aero.coefficients(&flow, Some(0.6)).unwrap();
        assert!(c.cl > 0.0, "{name}: cl = {}", c.cl);
        assert!(c.cd > 0.0, "{name}: cd = {}", c.cd);

        let props = aero.lift_properties(&flow, Some(0.6)).unwrap();
        assert!(props.cl_alpha > 5.0, "{name}: cl_alpha = {}", props.cl_alpha);
    }
}
