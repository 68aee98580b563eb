//! WCAG relative luminance and contrast text selection.
//!
//! Luminance here is the WCAG 2.x perceptual brightness of an sRGB color.
//! It is a different quantity from HSL lightness and the two must not be
//! mixed up: luminance decides the text color drawn on top of a swatch,
//! lightness decides whether a related color counts as darker or lighter.

use crate::color::Rgb;

/// Text color for light backgrounds.
pub const DARK_TEXT: &str = "#000000";

/// Text color for dark backgrounds.
pub const LIGHT_TEXT: &str = "#FFFFFF";

/// Boundary between the linear and power-law segments of the sRGB curve,
/// as written in WCAG 2.0.
const LINEAR_THRESHOLD: f64 = 0.03928;

/// Luminance above which dark text is used.
const CONTRAST_PIVOT: f64 = 0.5;

/// Converts an 8-bit sRGB channel to linear light.
fn srgb_to_linear(channel: u8) -> f64 {
    let c = f64::from(channel) / 255.0;
    if c <= LINEAR_THRESHOLD {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Compute the relative luminance of a color per WCAG.
///
/// Returns a value in `[0.0, 1.0]` where 0 is black and 1 is white.
pub fn relative_luminance(rgb: Rgb) -> f64 {
    let r = srgb_to_linear(rgb.r);
    let g = srgb_to_linear(rgb.g);
    let b = srgb_to_linear(rgb.b);
    0.2126 * r + 0.7152 * g + 0.0722 * b
}

/// Pick black or white text for a background of the given luminance.
///
/// Black only when `luminance > 0.5`; exactly 0.5 gets white.
pub fn contrast_text(luminance: f64) -> &'static str {
    if luminance > CONTRAST_PIVOT {
        DARK_TEXT
    } else {
        LIGHT_TEXT
    }
}
