//! Host bridge for the color analysis crates.
//!
//! [`chroma`] converts between color spaces and [`shades`] names colors and
//! finds their darker and lighter relatives. This crate speaks the plugin
//! message protocol on top of them and provides the `color-name` binary,
//! which serves that protocol over stdin and stdout as JSON lines.

pub mod bridge;
pub mod error;
pub mod log_init;

pub use bridge::{Bridge, ColorShape, PluginMessage, ShapeInfo, ShapePalette, serve};
pub use error::{BridgeError, Result};
pub use log_init::{init_logger, parse_level};
