//! Plugin message protocol between a design-tool host and the analysis core.
//!
//! Every message is a JSON object `{"type": ..., "content": ...}`. The host
//! reports the colors of its current selection; the bridge answers with one
//! palette of darker, selected and lighter variations per distinct color.
//!
//! ```text
//! host                         bridge
//! selectionchange  ───────▶   parse shapes, dedupe colors
//!                  ◀───────   palettes
//! create-color-shape ─────▶
//!                  ◀───────   create-text
//! theme            ───────▶   remember theme
//!                  ◀───────   theme
//! ```

use std::collections::HashSet;
use std::fs;
use std::io::{BufRead, Write};
use std::path::Path;

use chroma::{Rgb, normalize_hex, parse_css_color};
use serde::{Deserialize, Serialize};
use shades::{AnalysisConfig, ColorDictionary, ColorInfo, css_named_colors};

use crate::error::{BridgeError, Result};

/// A message in either direction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "content")]
pub enum PluginMessage {
    /// Inbound. The content is itself a JSON string holding a
    /// `[ColorShape]` array.
    #[serde(rename = "selectionchange")]
    SelectionChange(String),
    /// Inbound. Text for a new shape on the canvas.
    #[serde(rename = "create-color-shape")]
    CreateColorShape(String),
    /// Both directions. The host theme name.
    #[serde(rename = "theme")]
    Theme(String),
    /// Outbound reply to [`PluginMessage::SelectionChange`].
    #[serde(rename = "palettes")]
    Palettes(Vec<ShapePalette>),
    /// Outbound command asking the host to create a text shape.
    #[serde(rename = "create-text")]
    CreateText(String),
    #[serde(rename = "error")]
    Error(String),
}

/// One color used by the selected shapes, as reported by the host.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorShape {
    pub color: String,
    #[serde(default = "opaque")]
    pub opacity: f64,
    #[serde(default)]
    pub shape_info: Vec<ShapeInfo>,
}

/// Where a color is used: which shape, which property, which fill index.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeInfo {
    pub property: String,
    pub index: usize,
    pub shape_id: String,
}

/// The variations of one selected color.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShapePalette {
    /// Color exactly as the host reported it.
    pub color: String,
    pub opacity: f64,
    pub variations: Vec<ColorInfo>,
}

fn opaque() -> f64 {
    1.0
}

/// Stateful message handler.
#[derive(Clone, Debug)]
pub struct Bridge {
    dictionary: ColorDictionary,
    config: AnalysisConfig,
    theme: Option<String>,
}

impl Default for Bridge {
    fn default() -> Self {
        Self::new(css_named_colors().clone(), AnalysisConfig::default())
    }
}

impl Bridge {
    pub fn new(dictionary: ColorDictionary, config: AnalysisConfig) -> Self {
        Self {
            dictionary,
            config,
            theme: None,
        }
    }

    /// Build a bridge from optional dictionary and config files.
    ///
    /// Without a dictionary file the CSS named colors are used; without a
    /// config file the default analysis settings are used.
    pub fn load(dictionary_path: Option<&Path>, config_path: Option<&Path>) -> Result<Self> {
        let dictionary = match dictionary_path {
            Some(path) => {
                log::info!("loading color dictionary from {}", path.display());
                ColorDictionary::from_json(&fs::read_to_string(path)?)?
            }
            None => css_named_colors().clone(),
        };

        let config = match config_path {
            Some(path) => {
                log::info!("loading analysis config from {}", path.display());
                AnalysisConfig::from_json(&fs::read_to_string(path)?)?
            }
            None => AnalysisConfig::default(),
        };

        Ok(Self::new(dictionary, config))
    }

    pub fn dictionary(&self) -> &ColorDictionary {
        &self.dictionary
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Last theme announced by the host.
    pub fn theme(&self) -> Option<&str> {
        self.theme.as_deref()
    }

    /// React to one message. Outbound-only message types get no reply.
    pub fn handle(&mut self, message: PluginMessage) -> Option<PluginMessage> {
        match message {
            PluginMessage::SelectionChange(content) => Some(match self.palettes(&content) {
                Ok(palettes) => PluginMessage::Palettes(palettes),
                Err(err) => {
                    log::warn!("{err}");
                    PluginMessage::Error(err.to_string())
                }
            }),
            PluginMessage::CreateColorShape(text) => Some(PluginMessage::CreateText(text)),
            PluginMessage::Theme(theme) => {
                log::debug!("host theme is now {theme}");
                self.theme = Some(theme.clone());
                Some(PluginMessage::Theme(theme))
            }
            other => {
                log::warn!("ignoring outbound-only message {other:?}");
                None
            }
        }
    }

    /// Decode one JSON line, handle it and encode the reply.
    ///
    /// Blank lines produce nothing. A line that is not a valid message
    /// produces an `error` reply.
    pub fn handle_line(&mut self, line: &str) -> Result<Option<String>> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let reply = match serde_json::from_str(line) {
            Ok(message) => self.handle(message),
            Err(err) => {
                let err = BridgeError::Message(err);
                log::warn!("{err}");
                Some(PluginMessage::Error(err.to_string()))
            }
        };

        reply
            .map(|reply| serde_json::to_string(&reply).map_err(BridgeError::Encode))
            .transpose()
    }

    /// Build one palette per distinct color in a `selectionchange` payload.
    ///
    /// Colors are compared after conversion to normalized hex, so `#FF0000`,
    /// `#ff0000` and `rgb(255, 0, 0)` count once; the first occurrence is
    /// kept.
    pub fn palettes(&self, content: &str) -> Result<Vec<ShapePalette>> {
        let shapes: Vec<ColorShape> =
            serde_json::from_str(content).map_err(BridgeError::Selection)?;
        let mut seen = HashSet::new();

        let palettes: Vec<_> = shapes
            .into_iter()
            .filter_map(|shape| {
                let hex = analysis_hex(&shape.color);
                if !seen.insert(normalize_hex(&hex)) {
                    return None;
                }
                let variations = self.dictionary.contrast_variations_with(&self.config, &hex);
                Some(ShapePalette {
                    variations,
                    color: shape.color,
                    opacity: shape.opacity,
                })
            })
            .collect();

        log::debug!("built {} palettes", palettes.len());
        Ok(palettes)
    }
}

/// The hex string handed to the analysis core for a host color.
///
/// Hex input passes through untouched. `rgb()` and `hsl()` input is
/// converted. Anything else also passes through and is treated as black.
fn analysis_hex(color: &str) -> String {
    if Rgb::parse_hex(color).is_ok() {
        return color.to_string();
    }
    match parse_css_color(color) {
        Ok(rgb) => rgb.to_hex(),
        Err(err) => {
            log::warn!("unrecognized color {color:?}: {err}");
            color.to_string()
        }
    }
}

/// Serve JSON-lines messages from `input` until it is exhausted, writing
/// one reply line per handled message to `output`.
pub fn serve<R: BufRead, W: Write>(bridge: &mut Bridge, input: R, mut output: W) -> Result<()> {
    for line in input.lines() {
        if let Some(reply) = bridge.handle_line(&line?)? {
            writeln!(output, "{reply}")?;
            output.flush()?;
        }
    }
    Ok(())
}
