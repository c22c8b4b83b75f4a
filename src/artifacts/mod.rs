//! Fitted artifact loading.
//!
//! Two pre-fitted artifacts are loaded once at startup and shared read-only
//! by every prediction: a feature scaler and a regression model. They were
//! produced by an external training pipeline; this service only relies on
//! the [`Scaler`] and [`Regressor`] contracts, not on the concrete
//! algorithms inside.

pub mod model;
pub mod scaler;

use std::path::Path;
use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::error::{ModelerError, Result};
use crate::features::NUM_FEATURES;

pub use model::{GbdtModel, Tree, TreeNode};
pub use scaler::StandardScaler;

/// A fitted feature transform.
pub trait Scaler: Send + Sync {
    /// Apply the fitted transform to a raw feature vector.
    fn transform(&self, input: &[f64]) -> Result<Vec<f64>>;
}

/// A fitted regression model.
pub trait Regressor: Send + Sync {
    /// Predict a scalar output from a scaled feature vector.
    fn predict(&self, input: &[f64]) -> Result<f64>;
}

/// The two loaded artifacts, immutable for the process lifetime.
#[derive(Clone)]
pub struct ArtifactBundle {
    pub scaler: Arc<dyn Scaler>,
    pub model: Arc<dyn Regressor>,
}

impl std::fmt::Debug for ArtifactBundle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArtifactBundle").finish_non_exhaustive()
    }
}

impl ArtifactBundle {
    /// Load both artifacts from the configured paths.
    ///
    /// Any missing file, unreadable file, malformed document, or internally
    /// inconsistent artifact is an error. Callers treat this as fatal at
    /// startup; there is no partial-degradation mode.
    pub fn load(config: &Config) -> Result<Self> {
        let scaler: StandardScaler = read_artifact(&config.scaler_path, "scaler")?;
        let model: GbdtModel = read_artifact(&config.model_path, "model")?;
        scaler.check_consistency()?;
        model.check_consistency()?;

        if scaler.num_features() != NUM_FEATURES {
            return Err(ModelerError::artifact(
                "scaler",
                format!(
                    "fitted on {} features, form provides {}",
                    scaler.num_features(),
                    NUM_FEATURES
                ),
            ));
        }
        if model.num_features() != NUM_FEATURES {
            return Err(ModelerError::artifact(
                "model",
                format!(
                    "fitted on {} features, form provides {}",
                    model.num_features(),
                    NUM_FEATURES
                ),
            ));
        }

        tracing::info!(
            scaler_path = %config.scaler_path,
            model_path = %config.model_path,
            num_trees = model.num_trees(),
            "Loaded fitted artifacts"
        );

        Ok(Self {
            scaler: Arc::new(scaler),
            model: Arc::new(model),
        })
    }

    /// Build a bundle from already-constructed artifacts.
    pub fn from_parts(scaler: Arc<dyn Scaler>, model: Arc<dyn Regressor>) -> Self {
        Self { scaler, model }
    }
}

fn read_artifact<T: DeserializeOwned>(path: impl AsRef<Path>, name: &str) -> Result<T> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|e| {
        ModelerError::artifact(name, format!("cannot read {}: {}", path.display(), e))
    })?;
    serde_json::from_str(&contents).map_err(|e| {
        ModelerError::artifact(name, format!("cannot parse {}: {}", path.display(), e))
    })
}
