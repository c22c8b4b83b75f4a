//! Feature vector assembly for the pitting potential model.
//!
//! The scaler and model were fitted against one exact feature order. Swapping
//! any two positions silently corrupts predictions with no detectable error,
//! so the order lives in exactly one place: [`FeatureVector::to_array`].

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{ModelerError, Result};

/// Number of model input features.
pub const NUM_FEATURES: usize = 12;

/// Feature names in fitted model order.
pub const FEATURE_NAMES: [&str; NUM_FEATURES] = [
    "Al", "Cr", "Fe", "pH", "test temp (deg C)", "Ni", "M[Cl-]", "N", "Mn", "Mo", "C", "Si",
];

/// Alloy composition and test-environment inputs for one prediction.
///
/// Composition fields are wt.%, temperature is degrees Celsius, chloride is
/// molar concentration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FeatureVector {
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

impl FeatureVector {
    /// Assemble the ordered numeric vector the fitted artifacts expect.
    ///
    /// Order invariant: Al, Cr, Fe, pH, temp, Ni, Cl, N, Mn, Mo, C, Si.
    pub fn to_array(&self) -> [f64; NUM_FEATURES] {
        [
            self.al,
            self.cr,
            self.fe,
            self.ph,
            self.temperature_c,
            self.ni,
            self.chloride_m,
            self.n,
            self.mn,
            self.mo,
            self.c,
            self.si,
        ]
    }

    /// Validate each field against its form-surface bounds.
    ///
    /// Rejects out-of-range values rather than clamping; a clamped value
    /// would silently change the prediction. No cross-field validation is
    /// performed (composition need not sum to 100%).
    pub fn validate(&self) -> Result<()> {
        for spec in &FIELD_SPECS {
            let value = spec.get(self);
            if !(spec.min..=spec.max).contains(&value) {
                return Err(ModelerError::invalid_input(
                    spec.key,
                    format!(
                        "value {} outside allowed range [{}, {}]",
                        value, spec.min, spec.max
                    ),
                ));
            }
        }
        Ok(())
    }
}

impl Default for FeatureVector {
    /// Form-surface defaults: a generic 18Cr-10Ni austenitic stainless steel
    /// tested in 0.5 M chloride at 25 C, neutral pH.
    fn default() -> Self {
        Self {
            al: 0.0,
            cr: 18.0,
            fe: 60.0,
            ni: 10.0,
            mo: 2.0,
            n: 0.0,
            mn: 1.0,
            c: 0.03,
            si: 1.0,
            ph: 7.0,
            temperature_c: 25.0,
            chloride_m: 0.5,
        }
    }
}

/// Which section of the input form a field belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldSection {
    AlloyComposition,
    TestEnvironment,
}

/// Static description of one form field: bounds, default, and step.
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub section: FieldSection,
    pub min: f64,
    pub max: f64,
    pub default: f64,
    pub step: f64,
    get: fn(&FeatureVector) -> f64,
}

impl FieldSpec {
    /// Read this field's value out of a feature vector.
    pub fn get(&self, features: &FeatureVector) -> f64 {
        (self.get)(features)
    }
}

/// The 12 form fields in display order, composition first.
pub const FIELD_SPECS: [FieldSpec; NUM_FEATURES] = [
    FieldSpec {
        key: "al",
        label: "Al",
        section: FieldSection::AlloyComposition,
        min: 0.0,
        max: 100.0,
        default: 0.0,
        step: 0.01,
        get: |f| f.al,
    },
    FieldSpec {
        key: "cr",
        label: "Cr",
        section: FieldSection::AlloyComposition,
        min: 0.0,
        max: 100.0,
        default: 18.0,
        step: 0.01,
        get: |f| f.cr,
    },
    FieldSpec {
        key: "fe",
        label: "Fe",
        section: FieldSection::AlloyComposition,
        min: 0.0,
        max: 100.0,
        default: 60.0,
        step: 0.01,
        get: |f| f.fe,
    },
    FieldSpec {
        key: "ni",
        label: "Ni",
        section: FieldSection::AlloyComposition,
        min: 0.0,
        max: 100.0,
        default: 10.0,
        step: 0.01,
        get: |f| f.ni,
    },
    FieldSpec {
        key: "mo",
        label: "Mo",
        section: FieldSection::AlloyComposition,
        min: 0.0,
        max: 100.0,
        default: 2.0,
        step: 0.01,
        get: |f| f.mo,
    },
    FieldSpec {
        key: "n",
        label: "N",
        section: FieldSection::AlloyComposition,
        min: 0.0,
        max: 100.0,
        default: 0.0,
        step: 0.001,
        get: |f| f.n,
    },
    FieldSpec {
        key: "mn",
        label: "Mn",
        section: FieldSection::AlloyComposition,
        min: 0.0,
        max: 100.0,
        default: 1.0,
        step: 0.01,
        get: |f| f.mn,
    },
    FieldSpec {
        key: "c",
        label: "C",
        section: FieldSection::AlloyComposition,
        min: 0.0,
        max: 100.0,
        default: 0.03,
        step: 0.001,
        get: |f| f.c,
    },
    FieldSpec {
        key: "si",
        label: "Si",
        section: FieldSection::AlloyComposition,
        min: 0.0,
        max: 100.0,
        default: 1.0,
        step: 0.01,
        get: |f| f.si,
    },
    FieldSpec {
        key: "ph",
        label: "pH",
        section: FieldSection::TestEnvironment,
        min: 0.0,
        max: 14.0,
        default: 7.0,
        step: 0.01,
        get: |f| f.ph,
    },
    FieldSpec {
        key: "temperature_c",
        label: "Test Temperature (°C)",
        section: FieldSection::TestEnvironment,
        min: 0.0,
        max: 120.0,
        default: 25.0,
        step: 0.1,
        get: |f| f.temperature_c,
    },
    FieldSpec {
        key: "chloride_m",
        label: "Chloride Concentration (M)",
        section: FieldSection::TestEnvironment,
        min: 0.0,
        max: 6.0,
        default: 0.5,
        step: 0.001,
        get: |f| f.chloride_m,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_vector_order() {
        let features = FeatureVector::default();
        assert_eq!(
            features.to_array(),
            [0.0, 18.0, 60.0, 7.0, 25.0, 10.0, 0.5, 0.0, 1.0, 2.0, 0.03, 1.0]
        );
    }

    #[test]
    fn test_defaults_match_field_specs() {
        let features = FeatureVector::default();
        for spec in &FIELD_SPECS {
            assert_eq!(
                spec.get(&features),
                spec.default,
                "default mismatch for {}",
                spec.key
            );
        }
    }

    #[test]
    fn test_defaults_validate() {
        assert!(FeatureVector::default().validate().is_ok());
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let mut features = FeatureVector::default();
        features.ph = 14.0;
        features.temperature_c = 120.0;
        features.chloride_m = 6.0;
        assert!(features.validate().is_ok());

        features.ph = 0.0;
        features.temperature_c = 0.0;
        features.chloride_m = 0.0;
        assert!(features.validate().is_ok());
    }

    #[test]
    fn test_out_of_range_rejected() {
        let mut features = FeatureVector::default();
        features.ph = 14.5;

        let err = features.validate().unwrap_err();
        assert!(err.to_string().contains("ph"));
    }

    #[test]
    fn test_negative_composition_rejected() {
        let mut features = FeatureVector::default();
        features.cr = -1.0;
        assert!(features.validate().is_err());
    }

    #[test]
    fn test_composition_sum_not_checked() {
        // The model was fitted without a composition-sum constraint.
        let mut features = FeatureVector::default();
        features.al = 100.0;
        features.cr = 100.0;
        assert!(features.validate().is_ok());
    }

    #[test]
    fn test_field_specs_cover_all_features() {
        assert_eq!(FIELD_SPECS.len(), NUM_FEATURES);
        assert_eq!(FEATURE_NAMES.len(), NUM_FEATURES);
    }
}
