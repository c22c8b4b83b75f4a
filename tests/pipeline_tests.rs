//! End-to-end pipeline properties against the bundled fitted artifacts.

use pitting_modeler::artifacts::ArtifactBundle;
use pitting_modeler::{Config, FeatureVector, PredictionService, RiskBand};
use std::io::Write;

fn bundled_config() -> Config {
    Config {
        listen_addr: "127.0.0.1:0".to_string(),
        scaler_path: "artifacts/scaler.json".to_string(),
        model_path: "artifacts/model.json".to_string(),
    }
}

fn bundled_service() -> PredictionService {
    PredictionService::new(ArtifactBundle::load(&bundled_config()).unwrap())
}

#[test]
fn test_default_inputs_assemble_in_fitted_order() {
    let features = FeatureVector::default();
    assert_eq!(
        features.to_array(),
        [0.0, 18.0, 60.0, 7.0, 25.0, 10.0, 0.5, 0.0, 1.0, 2.0, 0.03, 1.0]
    );
}

#[test]
fn test_default_prediction_against_bundled_artifacts() {
    let service = bundled_service();
    let prediction = service.predict(&FeatureVector::default()).unwrap();

    assert_eq!(prediction.potential_mv, 485.0);
    assert_eq!(prediction.band, RiskBand::Moderate);
}

#[test]
fn test_pipeline_is_deterministic() {
    let service = bundled_service();

    let mut features = FeatureVector::default();
    features.cr = 23.7;
    features.mo = 3.3;
    features.chloride_m = 1.05;

    let first = service.predict(&features).unwrap();
    let second = service.predict(&features).unwrap();
    assert_eq!(first.potential_mv.to_bits(), second.potential_mv.to_bits());
}

#[test]
fn test_vector_position_swap_changes_prediction() {
    // The bundled artifacts are not symmetric in pH and temperature; feeding
    // the same values in swapped positions must change the output.
    let bundle = ArtifactBundle::load(&bundled_config()).unwrap();

    let mut ordered = FeatureVector::default().to_array();
    let baseline = bundle
        .model
        .predict(&bundle.scaler.transform(&ordered).unwrap())
        .unwrap();

    ordered.swap(3, 4); // pH <-> temperature
    let swapped = bundle
        .model
        .predict(&bundle.scaler.transform(&ordered).unwrap())
        .unwrap();

    assert_ne!(baseline, swapped);
}

#[test]
fn test_predictions_stay_within_band_thresholds() {
    let service = bundled_service();

    let mut features = FeatureVector::default();
    for chloride in [0.0, 0.5, 1.5, 3.0, 6.0] {
        features.chloride_m = chloride;
        let prediction = service.predict(&features).unwrap();
        assert_eq!(prediction.band, RiskBand::classify(prediction.potential_mv));
    }
}

#[test]
fn test_missing_artifact_prevents_startup() {
    let config = Config {
        listen_addr: "127.0.0.1:0".to_string(),
        scaler_path: "artifacts/does-not-exist.json".to_string(),
        model_path: "artifacts/model.json".to_string(),
    };

    // Loading fails, so no service and no router can ever be constructed.
    assert!(ArtifactBundle::load(&config).is_err());
}

#[test]
fn test_inconsistent_artifact_rejected_at_load() {
    // Scaler fitted on 11 features cannot serve the 12-feature form.
    let mut scaler_file = tempfile::NamedTempFile::new().unwrap();
    write!(
        scaler_file,
        r#"{{"mean": [0,0,0,0,0,0,0,0,0,0,0], "scale": [1,1,1,1,1,1,1,1,1,1,1]}}"#
    )
    .unwrap();

    let config = Config {
        listen_addr: "127.0.0.1:0".to_string(),
        scaler_path: scaler_file.path().to_str().unwrap().to_string(),
        model_path: "artifacts/model.json".to_string(),
    };

    assert!(ArtifactBundle::load(&config).is_err());
}
