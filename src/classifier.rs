//! Risk band classification for predicted pitting potentials.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Qualitative pitting corrosion risk, ordered from worst to best.
///
/// Bands are compiled-in constants; thresholds are not configurable at
/// runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum RiskBand {
    VeryHigh,
    High,
    Moderate,
    Low,
    VeryLow,
}

impl RiskBand {
    /// Classify a predicted pitting potential (mV SCE) into a risk band.
    ///
    /// Boundaries are left-inclusive: 300 mV is Moderate, not High, and
    /// 900 mV is Very Low, not Low. Total over the reals; the first
    /// satisfied condition wins.
    pub fn classify(potential_mv: f64) -> Self {
        if potential_mv < 0.0 {
            RiskBand::VeryHigh
        } else if potential_mv < 300.0 {
            RiskBand::High
        } else if potential_mv < 600.0 {
            RiskBand::Moderate
        } else if potential_mv < 900.0 {
            RiskBand::Low
        } else {
            RiskBand::VeryLow
        }
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            RiskBand::VeryHigh => "Very High Risk",
            RiskBand::High => "High Risk",
            RiskBand::Moderate => "Moderate Risk",
            RiskBand::Low => "Low Risk",
            RiskBand::VeryLow => "Very Low Risk",
        }
    }

    /// One-sentence engineering interpretation.
    pub fn description(&self) -> &'static str {
        match self {
            RiskBand::VeryHigh => {
                "Material is highly susceptible to pitting corrosion under these conditions."
            }
            RiskBand::High => {
                "Significant likelihood of pitting corrosion; not recommended for aggressive environments."
            }
            RiskBand::Moderate => {
                "Some resistance, but pitting may occur in harsh or variable service."
            }
            RiskBand::Low => {
                "Good resistance; suitable for most environments but monitor for severe exposures."
            }
            RiskBand::VeryLow => {
                "Excellent pitting resistance; material is suitable for demanding applications."
            }
        }
    }

    /// Display color (hex).
    pub fn color(&self) -> &'static str {
        match self {
            RiskBand::VeryHigh => "#d32f2f",
            RiskBand::High => "#f57c00",
            RiskBand::Moderate => "#fbc02d",
            RiskBand::Low => "#388e3c",
            RiskBand::VeryLow => "#1976d2",
        }
    }
}
