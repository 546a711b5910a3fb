use sf_project::{BasisDef, DesignSpecs, LATEST_VERSION, VleDef, load_specs, save_specs};

fn sample_specs() -> DesignSpecs {
    DesignSpecs {
        version: LATEST_VERSION,
        basis: BasisDef {
            product_rate_l_per_day: 1000.0,
            density_ethanol_kg_per_l: 0.789,
            feed_composition_x_f: 0.30,
            distillate_composition_x_d: 0.85,
            bottoms_composition_x_b: 0.02,
        },
        vle: VleDef {
            num_points: 51,
            pressure_atm: 1.0,
        },
    }
}

#[test]
fn save_and_load_roundtrip() {
    let path = std::env::temp_dir().join("sf_project_roundtrip.json");
    let _ = std::fs::remove_file(&path);

    let specs = sample_specs();
    save_specs(&path, &specs).unwrap();
    let loaded = load_specs(&path).unwrap();
    assert_eq!(loaded, specs);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn loading_rejects_invalid_specs() {
    let path = std::env::temp_dir().join("sf_project_invalid.json");
    let json = r#"{
        "basis": {
            "product_rate_L_per_day": -5.0,
            "density_ethanol_kg_per_L": 0.789,
            "feed_composition_xF": 0.30,
            "distillate_composition_xD": 0.85,
            "bottoms_composition_xB": 0.02
        }
    }"#;
    std::fs::write(&path, json).unwrap();

    let err = load_specs(&path).unwrap_err();
    assert!(err.to_string().contains("product_rate_L_per_day"));

    let _ = std::fs::remove_file(&path);
}

#[test]
fn loading_rejects_malformed_json() {
    let path = std::env::temp_dir().join("sf_project_malformed.json");
    std::fs::write(&path, "{ not json").unwrap();
    assert!(load_specs(&path).is_err());
    let _ = std::fs::remove_file(&path);
}
