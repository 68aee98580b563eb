//! Color naming and shade-variation analysis.
//!
//! Given a target color and a caller-owned dictionary of named colors,
//! this crate finds a human-readable name for the color and a short,
//! brightness-ordered palette of related colors from the dictionary.
//!
//! # Pipeline
//!
//! ```text
//! hex string
//!     │
//!     ▼
//! similarity.rs: score every dictionary color on hue/saturation, keep score < 30
//!     │
//!     ▼
//! variation.rs:  split by HSL lightness into darker/lighter, keep 2 of each
//!     │
//!     ▼
//! report.rs:     name + enrich each color, order darker → selected → lighter
//! ```
//!
//! Name resolution (`resolve.rs`) is an exact lookup in a prebuilt
//! [`NameIndex`] with a nearest-RGB fallback over the dictionary entries.
//!
//! Every operation is a pure function of its arguments. The dictionary and
//! its index are passed in by reference and never cached or rebuilt here.
//!
//! # Usage
//!
//! ```
//! use shades::{ColorEntry, NameIndex, VariationKind, find_contrast_variations};
//!
//! let entries = vec![
//!     ColorEntry::new("Red", "#FF0000"),
//!     ColorEntry::new("DarkRed", "#8B0000"),
//!     ColorEntry::new("LightRed", "#FF6666"),
//! ];
//! let index = NameIndex::from_entries(&entries);
//!
//! let palette = find_contrast_variations("#FF0000", &index, &entries);
//! let kinds: Vec<_> = palette.iter().map(|c| c.kind).collect();
//! assert_eq!(
//!     kinds,
//!     [Some(VariationKind::Darker), Some(VariationKind::Selected), Some(VariationKind::Lighter)]
//! );
//! ```

pub mod builtin;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod report;
pub mod resolve;
pub mod similarity;
pub mod variation;

// Re-export main types at crate root
pub use builtin::css_named_colors;
pub use config::AnalysisConfig;
pub use dictionary::{ColorDictionary, ColorEntry, NameIndex};
pub use error::{ConfigError, DictionaryError};
pub use report::{
    ColorInfo, VariationKind, find_contrast_variations, find_contrast_variations_with,
    process_color, process_variations,
};
pub use resolve::{find_closest_color, rgb_distance};
pub use similarity::{
    SimilarityCandidate, find_similar_colors, find_similar_colors_with, similarity_score,
    similarity_score_with,
};
pub use variation::{Direction, variations_by_lightness, variations_by_lightness_with};
