//! Strict parsing of the color notations hosts send and reports emit.
//!
//! Supported forms:
//! - Hex: `#rrggbb`, `rrggbb`
//! - RGB: `rgb(r, g, b)`
//! - HSL: `hsl(h, s%, l%)`
//!
//! Function names are case-insensitive and whitespace around tokens is
//! ignored. Alpha channels are not supported.

use nom::{
    IResult,
    bytes::complete::tag_no_case,
    character::complete::{char, digit1, multispace0},
    combinator::{all_consuming, map_res, opt, recognize},
    sequence::{delimited, pair, preceded, terminated, tuple},
};

use crate::color::{Rgb, hsl_to_rgb};
use crate::error::ColorParseError;

/// Parse a color in any supported notation.
///
/// # Examples
///
/// ```
/// use chroma::{Rgb, parse_css_color};
///
/// assert_eq!(parse_css_color("#FF0000").unwrap(), Rgb::new(255, 0, 0));
/// assert_eq!(parse_css_color("rgb(255, 0, 0)").unwrap(), Rgb::new(255, 0, 0));
/// assert_eq!(parse_css_color("hsl(0, 100%, 50%)").unwrap(), Rgb::new(255, 0, 0));
/// ```
pub fn parse_css_color(input: &str) -> Result<Rgb, ColorParseError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ColorParseError::Empty);
    }

    let lower = input.to_ascii_lowercase();

    if lower.starts_with("rgb") {
        return all_consuming(rgb_function)(lower.as_str())
            .map(|(_, rgb)| rgb)
            .map_err(|_| ColorParseError::InvalidRgb(input.to_string()));
    }

    if lower.starts_with("hsl") {
        let (h, s, l) = parse_hsl_components(input)?;
        if !h.is_finite() || !(0.0..=100.0).contains(&s) || !(0.0..=100.0).contains(&l) {
            return Err(ColorParseError::InvalidHsl(input.to_string()));
        }
        return Ok(hsl_to_rgb(h, s / 100.0, l / 100.0));
    }

    Rgb::parse_hex(input)
}

/// Parse `hsl(h, s%, l%)` into raw hue degrees and percentages.
///
/// Range checks are left to the caller.
pub(crate) fn parse_hsl_components(input: &str) -> Result<(f64, f64, f64), ColorParseError> {
    let trimmed = input.trim();
    all_consuming(hsl_function)(trimmed)
        .map(|(_, hsl)| hsl)
        .map_err(|_| ColorParseError::InvalidHsl(trimmed.to_string()))
}

/// Parse a floating point or integer number.
fn parse_number(input: &str) -> IResult<&str, f64> {
    map_res(
        recognize(tuple((
            opt(char('-')),
            digit1,
            opt(pair(char('.'), digit1)),
        ))),
        |s: &str| s.parse::<f64>(),
    )(input)
}

/// Comma with optional surrounding whitespace.
fn separator(input: &str) -> IResult<&str, char> {
    delimited(multispace0, char(','), multispace0)(input)
}

fn channel(input: &str) -> IResult<&str, u8> {
    map_res(digit1, |s: &str| s.parse::<u8>())(input)
}

fn percentage(input: &str) -> IResult<&str, f64> {
    terminated(parse_number, preceded(multispace0, char('%')))(input)
}

/// Parse `name(` ... `)` around an argument list.
fn function<'a, O>(
    name: &'static str,
    args: impl FnMut(&'a str) -> IResult<&'a str, O>,
) -> impl FnMut(&'a str) -> IResult<&'a str, O> {
    delimited(
        tuple((multispace0, tag_no_case(name), multispace0, char('('), multispace0)),
        args,
        tuple((multispace0, char(')'), multispace0)),
    )
}

fn rgb_function(input: &str) -> IResult<&str, Rgb> {
    let (input, (r, _, g, _, b)) = function(
        "rgb",
        tuple((channel, separator, channel, separator, channel)),
    )(input)?;
    Ok((input, Rgb::new(r, g, b)))
}

fn hsl_function(input: &str) -> IResult<&str, (f64, f64, f64)> {
    let (input, (h, _, s, _, l)) = function(
        "hsl",
        tuple((parse_number, separator, percentage, separator, percentage)),
    )(input)?;
    Ok((input, (h, s, l)))
}
