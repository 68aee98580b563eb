//! Error types for loading dictionaries and analysis settings.
//!
//! The analysis itself never fails; only the loaders that turn external
//! JSON into a [`ColorDictionary`](crate::ColorDictionary) or an
//! [`AnalysisConfig`](crate::AnalysisConfig) do.

use chroma::ColorParseError;
use thiserror::Error;

/// Errors that can occur when loading a color dictionary.
#[derive(Error, Debug)]
pub enum DictionaryError {
    /// The dictionary is not a JSON array of `{name, hex}` objects.
    #[error("malformed dictionary JSON")]
    Json(#[from] serde_json::Error),

    /// An entry has an empty (or all-whitespace) name.
    #[error("dictionary entry {index} has an empty name")]
    EmptyName { index: usize },

    /// An entry's hex is not a six-digit hex color.
    #[error("dictionary entry {name:?} has an invalid color")]
    InvalidHex {
        name: String,
        #[source]
        source: ColorParseError,
    },
}

/// Errors that can occur when loading analysis settings.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The settings are not a JSON object with the expected fields.
    #[error("malformed analysis config JSON")]
    Json(#[from] serde_json::Error),

    /// A threshold or weight is negative, infinite or NaN.
    #[error("{field} must be a finite, non-negative number (got {value})")]
    InvalidNumber { field: &'static str, value: f64 },

    /// At least one variation per direction is required.
    #[error("variationCount must be at least 1")]
    ZeroVariationCount,
}
