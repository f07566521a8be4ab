//! Color string parsing.
//!
//! Accepted forms, tried in this order:
//! * `#rrggbb` (exactly six hex digits, any case)
//! * `rgb(r, g, b)` / `rgba(r, g, b, a)` with integer channels 0–255
//! * `hsl(h, s%, l%)` / `hsla(h, s%, l%, a)` with hue in degrees 0–360
//!
//! Alpha is a plain decimal in 0–1. Function names are case-insensitive and
//! whitespace around arguments is ignored. A component outside its range is
//! an error; nothing is clamped.

use thiserror::Error;
use tracing::trace;

use crate::color::{Hsla, Hsva, Rgba8};
use crate::constants::{CHANNEL_MAX, HUE_DEGREES, PERCENT_MAX};
use crate::math::{hsl_to_hsv, rgb_to_hsv};
use crate::quantize::normalize;

/// Why a color string was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("empty color string")]
    Empty,
    #[error("unrecognized color format")]
    Unrecognized,
    #[error("hex colors must be '#' followed by six hex digits")]
    InvalidHex,
    #[error("{function}() takes {expected} arguments, found {found}")]
    Arity {
        function: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("invalid number for {component}")]
    InvalidNumber { component: &'static str },
    #[error("{component} must be a percentage")]
    MissingPercent { component: &'static str },
    #[error("{component} {value} is out of range")]
    OutOfRange { component: &'static str, value: f64 },
}

/// Parse a color string into canonical HSV.
pub fn parse(text: &str) -> Result<Hsva, ParseError> {
    let result = parse_trimmed(text.trim());
    if let Err(err) = &result {
        trace!(input = text, %err, "rejected color string");
    }
    result
}

/// Strict `#rrggbb` check, no surrounding whitespace allowed.
pub fn is_hex_color(text: &str) -> bool {
    text.strip_prefix('#')
        .is_some_and(|hex| hex.len() == 6 && hex.bytes().all(|b| b.is_ascii_hexdigit()))
}

fn parse_trimmed(s: &str) -> Result<Hsva, ParseError> {
    if s.is_empty() {
        return Err(ParseError::Empty);
    }
    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex(hex);
    }

    let (name, args) = split_function(s).ok_or(ParseError::Unrecognized)?;
    match name.to_ascii_lowercase().as_str() {
        "rgb" => parse_rgb("rgb", args, false),
        "rgba" => parse_rgb("rgba", args, true),
        "hsl" => parse_hsl("hsl", args, false),
        "hsla" => parse_hsl("hsla", args, true),
        _ => Err(ParseError::Unrecognized),
    }
}

fn parse_hex(hex: &str) -> Result<Hsva, ParseError> {
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ParseError::InvalidHex);
    }
    let byte =
        |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| ParseError::InvalidHex);
    let rgb = Rgba8::opaque(byte(0)?, byte(2)?, byte(4)?);
    Ok(rgb_to_hsv(normalize(rgb)))
}

/// Split `name(args)` into its name and the text between the parentheses.
fn split_function(s: &str) -> Option<(&str, &str)> {
    let open = s.find('(')?;
    let args = s[open + 1..].strip_suffix(')')?;
    Some((&s[..open], args))
}

fn arguments<'a>(
    function: &'static str,
    args: &'a str,
    expected: usize,
) -> Result<Vec<&'a str>, ParseError> {
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    if parts.len() != expected {
        return Err(ParseError::Arity {
            function,
            expected,
            found: parts.len(),
        });
    }
    Ok(parts)
}

fn parse_rgb(function: &'static str, args: &str, with_alpha: bool) -> Result<Hsva, ParseError> {
    let parts = arguments(function, args, if with_alpha { 4 } else { 3 })?;
    let r = channel(parts[0], "red")?;
    let g = channel(parts[1], "green")?;
    let b = channel(parts[2], "blue")?;
    let a = if with_alpha { alpha(parts[3])? } else { 1.0 };
    Ok(rgb_to_hsv(normalize(Rgba8::new(r, g, b, a))))
}

fn parse_hsl(function: &'static str, args: &str, with_alpha: bool) -> Result<Hsva, ParseError> {
    let parts = arguments(function, args, if with_alpha { 4 } else { 3 })?;
    let h = bounded(decimal(parts[0], "hue")?, HUE_DEGREES, "hue")?;
    let s = bounded(percent(parts[1], "saturation")?, PERCENT_MAX, "saturation")?;
    let l = bounded(percent(parts[2], "lightness")?, PERCENT_MAX, "lightness")?;
    let a = if with_alpha { alpha(parts[3])? } else { 1.0 };
    // 360° wraps to 0 inside Hsla::new
    let hsl = Hsla::new(h / HUE_DEGREES, s / PERCENT_MAX, l / PERCENT_MAX, a);
    Ok(hsl_to_hsv(hsl))
}

/// Unsigned decimal: digits with at most one '.', e.g. `12`, `0.5`, `.5`.
fn decimal(text: &str, component: &'static str) -> Result<f64, ParseError> {
    let invalid = ParseError::InvalidNumber { component };
    let mut digits = 0;
    let mut dots = 0;
    for c in text.chars() {
        match c {
            '0'..='9' => digits += 1,
            '.' => dots += 1,
            _ => return Err(invalid),
        }
    }
    if digits == 0 || dots > 1 {
        return Err(invalid);
    }
    text.parse::<f64>().map_err(|_| invalid)
}

fn bounded(value: f64, max: f64, component: &'static str) -> Result<f64, ParseError> {
    if (0.0..=max).contains(&value) {
        Ok(value)
    } else {
        Err(ParseError::OutOfRange { component, value })
    }
}

fn channel(text: &str, component: &'static str) -> Result<u8, ParseError> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidNumber { component });
    }
    let value = bounded(decimal(text, component)?, CHANNEL_MAX, component)?;
    Ok(value as u8)
}

fn percent(text: &str, component: &'static str) -> Result<f64, ParseError> {
    let number = text
        .strip_suffix('%')
        .ok_or(ParseError::MissingPercent { component })?;
    decimal(number, component)
}

fn alpha(text: &str) -> Result<f64, ParseError> {
    bounded(decimal(text, "alpha")?, 1.0, "alpha")
}
