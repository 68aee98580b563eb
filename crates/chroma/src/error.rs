//! Error types for strict color parsing.

use thiserror::Error;

/// Errors that can occur when parsing a color strictly.
///
/// The permissive [`hex_to_rgb`](crate::hex_to_rgb) path never produces
/// these; it falls back to black instead.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ColorParseError {
    /// Nothing but whitespace was given.
    #[error("empty color string")]
    Empty,

    /// Invalid hex color format.
    #[error("invalid hex color: {0}")]
    InvalidHex(String),

    /// Invalid `rgb(r, g, b)` color format.
    #[error("invalid RGB color: {0}")]
    InvalidRgb(String),

    /// Invalid `hsl(h, s%, l%)` color format.
    #[error("invalid HSL color: {0}")]
    InvalidHsl(String),
}
