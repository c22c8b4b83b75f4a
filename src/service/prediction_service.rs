use std::sync::Arc;

use crate::artifacts::{ArtifactBundle, Regressor, Scaler};
use crate::classifier::RiskBand;
use crate::error::Result;
use crate::features::FeatureVector;

/// One pipeline output: the predicted potential and its risk band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    pub potential_mv: f64,
    pub band: RiskBand,
}

/// Prediction service wiring the fitted artifacts into the inference
/// pipeline.
///
/// Holds the two loaded artifacts read-only for the process lifetime; each
/// call is an independent, stateless transaction against them.
pub struct PredictionService {
    scaler: Arc<dyn Scaler>,
    model: Arc<dyn Regressor>,
}

impl PredictionService {
    pub fn new(artifacts: ArtifactBundle) -> Self {
        Self {
            scaler: artifacts.scaler,
            model: artifacts.model,
        }
    }

    /// Run the full pipeline for one submission: validate, assemble the
    /// ordered vector, scale, predict, classify.
    ///
    /// Deterministic for fixed artifacts. A non-finite model output is
    /// returned as-is; the pipeline performs no sanitization of the
    /// prediction.
    pub fn predict(&self, features: &FeatureVector) -> Result<Prediction> {
        features.validate()?;

        let raw = features.to_array();
        let scaled = self.scaler.transform(&raw)?;
        let potential_mv = self.model.predict(&scaled)?;
        let band = RiskBand::classify(potential_mv);

        tracing::debug!(potential_mv, band = band.label(), "Prediction complete");

        Ok(Prediction { potential_mv, band })
    }
}
