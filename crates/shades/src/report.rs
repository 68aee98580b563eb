//! Assembly of enriched color reports.
//!
//! [`find_contrast_variations`] is the entry point hosts call: it runs
//! similarity scoring and variation selection once and returns the
//! darker variations, the selected color and the lighter variations as
//! [`ColorInfo`] records ready for rendering or JSON transport.

use chroma::{contrast_text, hex_to_rgb, relative_luminance, rgb_to_hsl};
use serde::{Deserialize, Serialize};

use crate::config::AnalysisConfig;
use crate::dictionary::{ColorEntry, NameIndex};
use crate::resolve::find_closest_color;
use crate::similarity::{SimilarityCandidate, find_similar_colors_with};
use crate::variation::{Direction, variations_by_lightness_with};

/// Role of a color within an assembled palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariationKind {
    Darker,
    Selected,
    Lighter,
}

impl From<Direction> for VariationKind {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Darker => Self::Darker,
            Direction::Lighter => Self::Lighter,
        }
    }
}

/// Everything a host needs to render one swatch.
///
/// Serializes to `{name, color, rgb, hsl, luminance, contrastText,
/// isSelected, type}`; `type` is omitted when unset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorInfo {
    /// Closest dictionary name.
    pub name: String,
    /// Hex code as given by the caller or the dictionary.
    pub color: String,
    /// `rgb(r, g, b)`.
    pub rgb: String,
    /// `hsl(h, s%, l%)`.
    pub hsl: String,
    /// WCAG relative luminance in `[0, 1]`.
    pub luminance: f64,
    /// `#000000` or `#FFFFFF`, whichever reads better on `color`.
    pub contrast_text: String,
    #[serde(default)]
    pub is_selected: bool,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<VariationKind>,
}

/// Describe a single color: conversions, name and contrast text.
///
/// The returned record has no [`VariationKind`].
pub fn process_color(
    hex: &str,
    index: &NameIndex,
    entries: &[ColorEntry],
    is_selected: bool,
) -> ColorInfo {
    let rgb = hex_to_rgb(hex);
    let hsl = rgb_to_hsl(rgb);
    let luminance = relative_luminance(rgb);

    ColorInfo {
        name: find_closest_color(hex, index, entries),
        color: hex.to_string(),
        rgb: rgb.to_string(),
        hsl: hsl.to_string(),
        luminance,
        contrast_text: contrast_text(luminance).to_string(),
        is_selected,
        kind: None,
    }
}

/// Describe each candidate and tag it with `direction`.
pub fn process_variations(
    candidates: &[SimilarityCandidate],
    direction: Direction,
    index: &NameIndex,
    entries: &[ColorEntry],
) -> Vec<ColorInfo> {
    candidates
        .iter()
        .map(|candidate| ColorInfo {
            kind: Some(direction.into()),
            ..process_color(&candidate.hex, index, entries, false)
        })
        .collect()
}

/// Build the palette for `target_hex`: darker variations, the selected
/// color, then lighter variations.
///
/// The result holds between one and five records. The selected record is
/// always present, always at position `darker.len()`, and is the only one
/// with `is_selected == true`. Malformed input and empty dictionaries
/// degrade to a single black or unnamed record rather than failing.
pub fn find_contrast_variations(
    target_hex: &str,
    index: &NameIndex,
    entries: &[ColorEntry],
) -> Vec<ColorInfo> {
    find_contrast_variations_with(&AnalysisConfig::default(), target_hex, index, entries)
}

pub fn find_contrast_variations_with(
    config: &AnalysisConfig,
    target_hex: &str,
    index: &NameIndex,
    entries: &[ColorEntry],
) -> Vec<ColorInfo> {
    let similar = find_similar_colors_with(config, target_hex, entries);

    let darker = variations_by_lightness_with(&similar, Direction::Darker, config.variation_count);
    let lighter =
        variations_by_lightness_with(&similar, Direction::Lighter, config.variation_count);

    log::debug!(
        "{target_hex}: {} similar colors, {} darker, {} lighter",
        similar.len(),
        darker.len(),
        lighter.len()
    );

    let selected = ColorInfo {
        kind: Some(VariationKind::Selected),
        ..process_color(target_hex, index, entries, true)
    };

    let mut palette = process_variations(&darker, Direction::Darker, index, entries);
    palette.push(selected);
    palette.extend(process_variations(&lighter, Direction::Lighter, index, entries));
    palette
}
