//! Antoine model integration tests.
//!
//! These pin the correlation against handbook reference points with broad
//! tolerances, and exercise the public trait surface the way downstream
//! crates consume it.

use sf_core::units::{atm, degc, to_atm};
use sf_thermo::{AntoineModel, Component, MoleFraction, VaporPressureModel, vapor_composition};

#[test]
fn water_reference_points() {
    let model = AntoineModel::new();

    // Normal boiling point
    let p100 = to_atm(
        model
            .saturation_pressure(Component::Water, degc(100.0))
            .unwrap(),
    );
    assert!((p100 - 1.0).abs() < 0.01, "P(100 C) = {p100} atm");

    // Room temperature: ~23.8 mmHg = 0.0313 atm
    let p25 = to_atm(
        model
            .saturation_pressure(Component::Water, degc(25.0))
            .unwrap(),
    );
    assert!((p25 - 0.0313).abs() < 0.002, "P(25 C) = {p25} atm");
}

#[test]
fn ethanol_reference_points() {
    let model = AntoineModel::new();

    let p_boil = to_atm(
        model
            .saturation_pressure(Component::Ethanol, degc(78.4))
            .unwrap(),
    );
    assert!((p_boil - 1.0).abs() < 0.01, "P(78.4 C) = {p_boil} atm");

    // ~59 mmHg = 0.078 atm at 25 C
    let p25 = to_atm(
        model
            .saturation_pressure(Component::Ethanol, degc(25.0))
            .unwrap(),
    );
    assert!((p25 - 0.078).abs() < 0.005, "P(25 C) = {p25} atm");
}

#[test]
fn model_works_through_the_trait_object() {
    let model: &dyn VaporPressureModel = &AntoineModel::new();
    assert_eq!(model.name(), "antoine");

    let x = MoleFraction::new(0.5).unwrap();
    let y = vapor_composition(model, x, degc(86.8), atm(1.0)).unwrap();
    assert!(y > 0.5 && y < 1.0, "y = {y}");
}
