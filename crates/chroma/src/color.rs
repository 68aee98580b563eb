//! RGB and HSL color values.
//!
//! Both types render to the CSS functional notation used in color reports
//! (`rgb(255, 0, 0)`, `hsl(0, 100%, 50%)`) and parse back from it via
//! [`FromStr`].

use std::fmt;
use std::str::FromStr;

use crate::css;
use crate::error::ColorParseError;

/// An sRGB color with 8-bit channels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a six-digit hex color, with or without a leading `#`.
    ///
    /// Matching is case-insensitive. Shorthand (`#f00`) and alpha
    /// (`#ff000080`) forms are rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use chroma::Rgb;
    ///
    /// assert_eq!(Rgb::parse_hex("#9932CC").unwrap(), Rgb::new(0x99, 0x32, 0xcc));
    /// assert!(Rgb::parse_hex("#f00").is_err());
    /// ```
    pub fn parse_hex(hex: &str) -> Result<Self, ColorParseError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidHex(hex.to_string()));
        }

        let channel = |at: usize| {
            u8::from_str_radix(&digits[at..at + 2], 16)
                .map_err(|_| ColorParseError::InvalidHex(hex.to_string()))
        };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Lowercase `#rrggbb` form.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Channels scaled to `[0, 1]`.
    pub(crate) fn unit_channels(self) -> (f64, f64, f64) {
        (
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        )
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ColorParseError;

    /// Accepts every form [`parse_css_color`](crate::parse_css_color) does.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        css::parse_css_color(s)
    }
}

/// An HSL color rounded to whole degrees and percent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Hsl {
    /// Hue in degrees. Rounding can land exactly on 360 for reds that
    /// lean very slightly towards blue.
    pub h: u16,
    /// Saturation percent (0-100).
    pub s: u8,
    /// Lightness percent (0-100). This is not relative luminance.
    pub l: u8,
}

impl Hsl {
    pub const fn new(h: u16, s: u8, l: u8) -> Self {
        Self { h, s, l }
    }

    pub fn to_rgb(self) -> Rgb {
        hsl_to_rgb(
            f64::from(self.h),
            f64::from(self.s) / 100.0,
            f64::from(self.l) / 100.0,
        )
    }
}

impl From<Rgb> for Hsl {
    fn from(rgb: Rgb) -> Self {
        rgb_to_hsl(rgb)
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }
}

impl FromStr for Hsl {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (h, s_pct, l_pct) = css::parse_hsl_components(s)?;
        let whole = |v: f64| v.fract() == 0.0;
        if !(whole(h) && whole(s_pct) && whole(l_pct))
            || !(0.0..=360.0).contains(&h)
            || !(0.0..=100.0).contains(&s_pct)
            || !(0.0..=100.0).contains(&l_pct)
        {
            return Err(ColorParseError::InvalidHsl(s.trim().to_string()));
        }
        Ok(Self::new(h as u16, s_pct as u8, l_pct as u8))
    }
}

/// Convert a hex color to RGB, degrading to black on malformed input.
///
/// Accepts exactly six hex digits with an optional leading `#`, in any
/// case. Wrong length or non-hex characters yield `(0, 0, 0)`; this
/// function never fails.
pub fn hex_to_rgb(hex: &str) -> Rgb {
    Rgb::parse_hex(hex).unwrap_or_default()
}

/// Canonical key for hex comparisons: lowercase, `#`-prefixed.
///
/// Only the case and the prefix are normalized. Whitespace is kept, so a
/// padded hex never matches a key that [`hex_to_rgb`] would reject.
pub fn normalize_hex(hex: &str) -> String {
    let lower = hex.to_ascii_lowercase();
    if lower.starts_with('#') {
        lower
    } else {
        format!("#{lower}")
    }
}

/// Convert RGB to HSL with hue, saturation and lightness rounded to
/// integers.
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let (r, g, b) = rgb.unit_channels();

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    let (h, s) = if max == min {
        // Achromatic
        (0.0, 0.0)
    } else {
        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };
        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };
        (h / 6.0, s)
    };

    Hsl::new(
        (h * 360.0).round() as u16,
        (s * 100.0).round() as u8,
        (l * 100.0).round() as u8,
    )
}

/// Convert HSL back to RGB.
///
/// `h` is in degrees (any finite value, wrapped into `[0, 360)`), `s` and
/// `l` are fractions in `[0, 1]`.
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Rgb {
    let to_channel = |v: f64| (v * 255.0).round().clamp(0.0, 255.0) as u8;

    if s == 0.0 {
        let gray = to_channel(l);
        return Rgb::new(gray, gray, gray);
    }

    let h = h.rem_euclid(360.0) / 360.0;
    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    Rgb::new(
        to_channel(hue_to_rgb(p, q, h + 1.0 / 3.0)),
        to_channel(hue_to_rgb(p, q, h)),
        to_channel(hue_to_rgb(p, q, h - 1.0 / 3.0)),
    )
}

fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 1.0 / 2.0 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
    }
    p
}
