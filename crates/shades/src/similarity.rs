//! Hue/saturation similarity between a target and dictionary colors.
//!
//! The score ignores lightness, so darker and lighter versions of a hue
//! stay candidates for the variation selector.

use chroma::{Hsl, hex_to_rgb, rgb_to_hsl};
use serde::{Deserialize, Serialize};

use crate::config::AnalysisConfig;
use crate::dictionary::ColorEntry;

/// A dictionary color that passed the similarity filter.
///
/// Serializes with the field names hosts already consume:
/// `{color, score, luminance, lumDiff}`. Despite the JSON names, the two
/// brightness fields hold HSL lightness, not WCAG luminance.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimilarityCandidate {
    /// Hex code exactly as it appears in the dictionary.
    #[serde(rename = "color")]
    pub hex: String,
    /// Weighted hue/saturation distance; always below the threshold.
    pub score: f64,
    /// HSL lightness of the candidate, in percent.
    #[serde(rename = "luminance")]
    pub lightness: u8,
    /// Target lightness minus candidate lightness. Positive means the
    /// candidate is darker, negative means lighter.
    #[serde(rename = "lumDiff")]
    pub lightness_diff: i16,
}

/// Score how far apart two colors are in hue and saturation.
///
/// `|Δhue| * 1 + |Δsaturation| * 0.5`; lower is more similar. Hue
/// difference is a plain absolute difference with no wraparound.
pub fn similarity_score(target: Hsl, current: Hsl) -> f64 {
    similarity_score_with(&AnalysisConfig::default(), target, current)
}

pub fn similarity_score_with(config: &AnalysisConfig, target: Hsl, current: Hsl) -> f64 {
    let hue_diff = (f64::from(target.h) - f64::from(current.h)).abs();
    let sat_diff = (f64::from(target.s) - f64::from(current.s)).abs();
    hue_diff * config.hue_weight + sat_diff * config.saturation_weight
}

/// Collect every dictionary color whose score against `target_hex` is
/// below 30, in dictionary order.
pub fn find_similar_colors(target_hex: &str, entries: &[ColorEntry]) -> Vec<SimilarityCandidate> {
    find_similar_colors_with(&AnalysisConfig::default(), target_hex, entries)
}

pub fn find_similar_colors_with(
    config: &AnalysisConfig,
    target_hex: &str,
    entries: &[ColorEntry],
) -> Vec<SimilarityCandidate> {
    let target = rgb_to_hsl(hex_to_rgb(target_hex));

    entries
        .iter()
        .filter_map(|entry| {
            let current = rgb_to_hsl(hex_to_rgb(&entry.hex));
            let score = similarity_score_with(config, target, current);
            (score < config.similarity_threshold).then(|| SimilarityCandidate {
                hex: entry.hex.clone(),
                score,
                lightness: current.l,
                lightness_diff: i16::from(target.l) - i16::from(current.l),
            })
        })
        .collect()
}
