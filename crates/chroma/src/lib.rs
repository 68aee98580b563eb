//! Color-space conversions for color naming.
//!
//! This crate turns hex color codes into the numeric representations the
//! naming and variation engine works with:
//!
//! - **RGB**: three 8-bit channels parsed from `#rrggbb`
//! - **HSL**: integer hue (degrees), saturation and lightness (percent)
//! - **Relative luminance**: the WCAG brightness used to pick contrast text
//!
//! # Permissive vs. strict parsing
//!
//! [`hex_to_rgb`] never fails: anything that is not six hex digits (with
//! an optional leading `#`) becomes black. Callers that need to reject
//! bad input use [`Rgb::parse_hex`] or [`parse_css_color`] instead.
//!
//! # Usage
//!
//! ```
//! use chroma::{contrast_text, hex_to_rgb, relative_luminance, rgb_to_hsl};
//!
//! let rgb = hex_to_rgb("#FF0000");
//! assert_eq!(rgb.to_string(), "rgb(255, 0, 0)");
//! assert_eq!(rgb_to_hsl(rgb).to_string(), "hsl(0, 100%, 50%)");
//!
//! let luminance = relative_luminance(rgb);
//! assert_eq!(contrast_text(luminance), "#FFFFFF");
//! ```

pub mod color;
pub mod contrast;
pub mod css;
pub mod error;

// Re-export main types at crate root
pub use color::{Hsl, Rgb, hex_to_rgb, hsl_to_rgb, normalize_hex, rgb_to_hsl};
pub use contrast::{DARK_TEXT, LIGHT_TEXT, contrast_text, relative_luminance};
pub use css::parse_css_color;
pub use error::ColorParseError;
