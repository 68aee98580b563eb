//! Reference color names and their hex lookup index.
//!
//! A dictionary is an ordered list of [`ColorEntry`] values. Order matters:
//! nearest-color ties resolve to the entry that comes first, and similar
//! colors are reported in dictionary order.
//!
//! The [`NameIndex`] is built once by whoever owns the entries and then
//! passed alongside them into every analysis call.

use std::collections::HashMap;

use chroma::{Rgb, normalize_hex};
use serde::{Deserialize, Serialize};

use crate::config::AnalysisConfig;
use crate::error::DictionaryError;
use crate::report::{ColorInfo, find_contrast_variations_with};
use crate::resolve::find_closest_color;

/// A named reference color.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorEntry {
    pub name: String,
    /// Hex code as supplied, e.g. `#FF0000`. Not normalized.
    pub hex: String,
}

impl ColorEntry {
    pub fn new(name: impl Into<String>, hex: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hex: hex.into(),
        }
    }
}

/// Exact-match lookup from normalized hex to color name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NameIndex {
    names: HashMap<String, String>,
}

impl NameIndex {
    /// Index the entries by normalized hex.
    ///
    /// When several entries share a hex the last one wins.
    pub fn from_entries(entries: &[ColorEntry]) -> Self {
        let names = entries
            .iter()
            .map(|entry| (normalize_hex(&entry.hex), entry.name.clone()))
            .collect();
        Self { names }
    }

    /// Look up a hex in any case, with or without `#`.
    ///
    /// An empty name counts as a miss.
    pub fn get(&self, hex: &str) -> Option<&str> {
        self.names
            .get(&normalize_hex(hex))
            .map(String::as_str)
            .filter(|name| !name.is_empty())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// An ordered dictionary of named colors together with its index.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ColorDictionary {
    entries: Vec<ColorEntry>,
    index: NameIndex,
}

impl ColorDictionary {
    pub fn from_entries(entries: Vec<ColorEntry>) -> Self {
        let index = NameIndex::from_entries(&entries);
        Self { entries, index }
    }

    /// Load a dictionary from a JSON array of `{"name", "hex"}` objects.
    ///
    /// Unlike the analysis functions, loading is strict: every entry needs
    /// a non-blank name and a six-digit hex color.
    ///
    /// ```
    /// use shades::ColorDictionary;
    ///
    /// let json = r##"[{"name": "Red", "hex": "#FF0000"}]"##;
    /// let dictionary = ColorDictionary::from_json(json).unwrap();
    /// assert_eq!(dictionary.len(), 1);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, DictionaryError> {
        let entries: Vec<ColorEntry> = serde_json::from_str(json)?;

        for (index, entry) in entries.iter().enumerate() {
            if entry.name.trim().is_empty() {
                return Err(DictionaryError::EmptyName { index });
            }
            Rgb::parse_hex(&entry.hex).map_err(|source| DictionaryError::InvalidHex {
                name: entry.name.clone(),
                source,
            })?;
        }

        log::debug!("loaded color dictionary with {} entries", entries.len());
        Ok(Self::from_entries(entries))
    }

    pub fn entries(&self) -> &[ColorEntry] {
        &self.entries
    }

    pub fn index(&self) -> &NameIndex {
        &self.index
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Closest name for a color; empty only when the dictionary is.
    pub fn name_of(&self, hex: &str) -> String {
        find_closest_color(hex, &self.index, &self.entries)
    }

    /// Darker, selected and lighter variations of a color.
    pub fn contrast_variations(&self, hex: &str) -> Vec<ColorInfo> {
        self.contrast_variations_with(&AnalysisConfig::default(), hex)
    }

    pub fn contrast_variations_with(&self, config: &AnalysisConfig, hex: &str) -> Vec<ColorInfo> {
        find_contrast_variations_with(config, hex, &self.index, &self.entries)
    }
}
