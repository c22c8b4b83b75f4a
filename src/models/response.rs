use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::classifier::RiskBand;

/// Qualitative risk assessment attached to a prediction.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RiskAssessment {
    pub band: RiskBand,
    pub label: String,
    pub description: String,
    pub color: String,
}

impl From<RiskBand> for RiskAssessment {
    fn from(band: RiskBand) -> Self {
        Self {
            band,
            label: band.label().to_string(),
            description: band.description().to_string(),
            color: band.color().to_string(),
        }
    }
}

/// One prediction result.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PredictionResponse {
    /// Predicted pitting potential in mV vs. SCE.
    pub pitting_potential_mv: f64,
    /// Potential formatted to one decimal place with unit.
    pub display: String,
    pub risk: RiskAssessment,
}

impl PredictionResponse {
    pub fn new(pitting_potential_mv: f64, band: RiskBand) -> Self {
        Self {
            pitting_potential_mv,
            display: format!("{:.1} mV SCE", pitting_potential_mv),
            risk: band.into(),
        }
    }
}
