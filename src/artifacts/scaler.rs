//! Standard-scaler feature transform.

use serde::{Deserialize, Serialize};

use super::Scaler;
use crate::error::{ModelerError, Result};

/// Fitted per-feature standardization: `(x - mean) / scale`.
///
/// The mean and scale vectors come from the external training pipeline and
/// are positional; element `i` applies to feature `i` of the fitted order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardScaler {
    mean: Vec<f64>,
    scale: Vec<f64>,
}

impl StandardScaler {
    pub fn new(mean: Vec<f64>, scale: Vec<f64>) -> Result<Self> {
        let scaler = Self { mean, scale };
        scaler.check_consistency()?;
        Ok(scaler)
    }

    /// Number of features this scaler was fitted on.
    pub fn num_features(&self) -> usize {
        self.mean.len()
    }

    /// Verify the fitted vectors agree with each other.
    pub(crate) fn check_consistency(&self) -> Result<()> {
        if self.mean.len() != self.scale.len() {
            return Err(ModelerError::artifact(
                "scaler",
                format!(
                    "mean has {} entries but scale has {}",
                    self.mean.len(),
                    self.scale.len()
                ),
            ));
        }
        if self.mean.is_empty() {
            return Err(ModelerError::artifact("scaler", "fitted on zero features"));
        }
        if let Some(i) = self.scale.iter().position(|&s| s == 0.0) {
            return Err(ModelerError::artifact(
                "scaler",
                format!("zero scale for feature {}", i),
            ));
        }
        Ok(())
    }
}

impl Scaler for StandardScaler {
    fn transform(&self, input: &[f64]) -> Result<Vec<f64>> {
        if input.len() != self.mean.len() {
            return Err(ModelerError::prediction(format!(
                "scaler fitted on {} features, got {}",
                self.mean.len(),
                input.len()
            )));
        }

        Ok(input
            .iter()
            .zip(self.mean.iter().zip(&self.scale))
            .map(|(&x, (&mean, &scale))| (x - mean) / scale)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_applies_mean_and_scale() {
        let scaler = StandardScaler::new(vec![1.0, 2.0], vec![2.0, 4.0]).unwrap();
        let scaled = scaler.transform(&[3.0, 10.0]).unwrap();
        assert_eq!(scaled, vec![1.0, 2.0]);
    }

    #[test]
    fn test_transform_is_deterministic() {
        let scaler = StandardScaler::new(vec![0.5; 12], vec![1.5; 12]).unwrap();
        let input = [0.0, 18.0, 60.0, 7.0, 25.0, 10.0, 0.5, 0.0, 1.0, 2.0, 0.03, 1.0];
        assert_eq!(
            scaler.transform(&input).unwrap(),
            scaler.transform(&input).unwrap()
        );
    }

    #[test]
    fn test_dimension_mismatch_rejected() {
        let scaler = StandardScaler::new(vec![0.0; 12], vec![1.0; 12]).unwrap();
        assert!(scaler.transform(&[1.0; 11]).is_err());
        assert!(scaler.transform(&[1.0; 13]).is_err());
    }

    #[test]
    fn test_mismatched_fit_vectors_rejected() {
        assert!(StandardScaler::new(vec![0.0; 12], vec![1.0; 11]).is_err());
    }

    #[test]
    fn test_zero_scale_rejected() {
        let mut scale = vec![1.0; 12];
        scale[4] = 0.0;
        let err = StandardScaler::new(vec![0.0; 12], scale).unwrap_err();
        assert!(err.to_string().contains("feature 4"));
    }
}
