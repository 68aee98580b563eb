//! Tunable analysis settings.
//!
//! With the defaults a candidate is similar when
//! `|Δhue| * 1.0 + |Δsaturation| * 0.5 < 30`, and at most two darker and
//! two lighter variations are kept.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Settings for similarity scoring and variation selection.
///
/// Deserializes from camelCase JSON; missing fields take their defaults.
///
/// ```
/// use shades::AnalysisConfig;
///
/// let config = AnalysisConfig::from_json(r#"{ "variationCount": 3 }"#).unwrap();
/// assert_eq!(config.variation_count, 3);
/// assert_eq!(config.similarity_threshold, 30.0);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct AnalysisConfig {
    /// Candidates scoring at or above this are discarded (strict `<`).
    pub similarity_threshold: f64,
    /// Weight of the absolute hue difference, in degrees.
    pub hue_weight: f64,
    /// Weight of the absolute saturation difference, in percent.
    pub saturation_weight: f64,
    /// Maximum number of darker and of lighter variations.
    pub variation_count: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: 30.0,
            hue_weight: 1.0,
            saturation_weight: 0.5,
            variation_count: 2,
        }
    }
}

impl AnalysisConfig {
    /// Parse and validate settings from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every number is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let numbers = [
            ("similarityThreshold", self.similarity_threshold),
            ("hueWeight", self.hue_weight),
            ("saturationWeight", self.saturation_weight),
        ];
        for (field, value) in numbers {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidNumber { field, value });
            }
        }

        if self.variation_count == 0 {
            return Err(ConfigError::ZeroVariationCount);
        }
        Ok(())
    }
}
