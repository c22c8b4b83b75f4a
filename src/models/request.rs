use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::FeatureVector;

/// Prediction request: alloy composition (wt.%) plus test-environment
/// parameters. Any omitted field takes its form-surface default.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct PredictionRequest {
    pub al: f64,
    pub cr: f64,
    pub fe: f64,
    pub ni: f64,
    pub mo: f64,
    pub n: f64,
    pub mn: f64,
    pub c: f64,
    pub si: f64,
    pub ph: f64,
    pub temperature_c: f64,
    pub chloride_m: f64,
}

impl Default for PredictionRequest {
    fn default() -> Self {
        FeatureVector::default().into()
    }
}

impl From<FeatureVector> for PredictionRequest {
    fn from(features: FeatureVector) -> Self {
        Self {
            al: features.al,
            cr: features.cr,
            fe: features.fe,
            ni: features.ni,
            mo: features.mo,
            n: features.n,
            mn: features.mn,
            c: features.c,
            si: features.si,
            ph: features.ph,
            temperature_c: features.temperature_c,
            chloride_m: features.chloride_m,
        }
    }
}

impl From<PredictionRequest> for FeatureVector {
    fn from(request: PredictionRequest) -> Self {
        Self {
            al: request.al,
            cr: request.cr,
            fe: request.fe,
            ni: request.ni,
            mo: request.mo,
            n: request.n,
            mn: request.mn,
            c: request.c,
            si: request.si,
            ph: request.ph,
            temperature_c: request.temperature_c,
            chloride_m: request.chloride_m,
        }
    }
}
