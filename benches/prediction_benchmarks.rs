use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pitting_modeler::artifacts::ArtifactBundle;
use pitting_modeler::{Config, FeatureVector, PredictionService, RiskBand};

fn bundled_service() -> PredictionService {
    let config = Config {
        listen_addr: "127.0.0.1:0".to_string(),
        scaler_path: "artifacts/scaler.json".to_string(),
        model_path: "artifacts/model.json".to_string(),
    };
    PredictionService::new(ArtifactBundle::load(&config).unwrap())
}

fn benchmark_full_pipeline(c: &mut Criterion) {
    let service = bundled_service();
    let features = FeatureVector::default();

    c.bench_function("predict_pipeline", |b| {
        b.iter(|| service.predict(black_box(&features)).unwrap());
    });
}

fn benchmark_artifact_load(c: &mut Criterion) {
    let config = Config {
        listen_addr: "127.0.0.1:0".to_string(),
        scaler_path: "artifacts/scaler.json".to_string(),
        model_path: "artifacts/model.json".to_string(),
    };

    c.bench_function("artifact_load", |b| {
        b.iter(|| ArtifactBundle::load(black_box(&config)).unwrap());
    });
}

fn benchmark_classifier(c: &mut Criterion) {
    c.bench_function("risk_classify", |b| {
        b.iter(|| {
            for x in [-50.0, 150.0, 450.0, 750.0, 1200.0] {
                black_box(RiskBand::classify(black_box(x)));
            }
        });
    });
}

criterion_group!(
    benches,
    benchmark_full_pipeline,
    benchmark_artifact_load,
    benchmark_classifier
);
criterion_main!(benches);
