use tea_project::*;
use tea_sensitivity::SensitivityParameter;

fn custom_scenario() -> Scenario {
    let mut scenario = Scenario::new("High yield");
    scenario.annual_feedstock_tons = 2500.0;
    scenario.ethanol_price_usd_per_gal = 2.75;
    scenario.efficiencies.hydrolysis = 0.85;
    scenario.sensitivity = SensitivityDef {
        parameter: SensitivityParameter::DistillationEfficiency,
        range_percent: 10,
        step_percent: 5,
    };
    scenario
}

#[test]
fn roundtrip_yaml_scenario() {
    let scenario = custom_scenario();
    let path = std::env::temp_dir().join("tea_project_roundtrip.yaml");

    save_yaml(&path, &scenario).unwrap();
    let loaded = load_yaml(&path).unwrap();

    assert_eq!(scenario, loaded);
}

#[test]
fn roundtrip_json_scenario() {
    let scenario = custom_scenario();
    let path = std::env::temp_dir().join("tea_project_roundtrip.json");

    save_json(&path, &scenario).unwrap();
    let loaded = load_json(&path).unwrap();

    assert_eq!(scenario, loaded);
}

#[test]
fn save_refuses_invalid_scenario() {
    let mut scenario = Scenario::new("Broken");
    scenario.efficiencies.pretreatment = 1.2;
    let path = std::env::temp_dir().join("tea_project_invalid.yaml");

    let err = save_yaml(&path, &scenario).unwrap_err();
    assert!(matches!(err, ProjectError::Validation(_)));
}

#[test]
fn load_rejects_out_of_bounds_file() {
    let path = std::env::temp_dir().join("tea_project_out_of_bounds.yaml");
    std::fs::write(
        &path,
        "version: 1\nname: Too big\nannual_feedstock_tons: 50000\n",
    )
    .unwrap();

    let err = load_yaml(&path).unwrap_err();
    assert!(matches!(err, ProjectError::Validation(_)));
}

#[test]
fn load_rejects_unknown_sensitivity_parameter() {
    let path = std::env::temp_dir().join("tea_project_unknown_param.yaml");
    std::fs::write(
        &path,
        "version: 1\nname: Typo\nsensitivity:\n  parameter: Ethanol Prices\n",
    )
    .unwrap();

    let err = load_yaml(&path).unwrap_err();
    assert!(matches!(err, ProjectError::Yaml(_)));
}

#[test]
fn missing_file_is_io_error() {
    let path = std::env::temp_dir().join("tea_project_does_not_exist.yaml");
    let _ = std::fs::remove_file(&path);
    assert!(matches!(load_yaml(&path), Err(ProjectError::Io(_))));
}
