//! Textual output of canonical colors.
//!
//! Opaque colors use the dialect's plain form. Translucent colors use the
//! alpha-carrying form; six-digit hex cannot carry alpha, so the hex dialect
//! falls back to `rgba(...)`. Everything the formatter emits is accepted by
//! [`parse`](crate::parse).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::Hsva;
use crate::constants::{HUE_DEGREES, PERCENT_MAX};
use crate::math::{hsv_to_hsl, hsv_to_rgb};
use crate::quantize::denormalize;

/// Output dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// `#rrggbb`, or `rgba(r,g,b,a)` when translucent
    #[default]
    Hex,
    /// `rgb(r,g,b)` / `rgba(r,g,b,a)`
    Rgb,
    /// `hsl(h,s%,l%)` / `hsla(h,s%,l%,a)`
    Hsl,
}

impl Dialect {
    /// Look up a dialect by name. Unknown names mean hex.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "rgb" => Dialect::Rgb,
            "hsl" => Dialect::Hsl,
            _ => Dialect::Hex,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Dialect::Hex => "hex",
            Dialect::Rgb => "rgb",
            Dialect::Hsl => "hsl",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Render `color` as text in `dialect`.
pub fn format(color: Hsva, dialect: Dialect) -> String {
    let opaque = color.a() == 1.0;
    match dialect {
        Dialect::Hsl => {
            let hsl = hsv_to_hsl(color);
            // a hue just short of a full turn rounds up to 360°, which is 0°
            let h = (hsl.h() * HUE_DEGREES).round() as u32 % HUE_DEGREES as u32;
            let s = (hsl.s() * PERCENT_MAX).round() as u32;
            let l = (hsl.l() * PERCENT_MAX).round() as u32;
            if opaque {
                format!("hsl({h},{s}%,{l}%)")
            } else {
                format!("hsla({h},{s}%,{l}%,{})", alpha_text(color.a()))
            }
        }
        Dialect::Hex if opaque => {
            let rgb = denormalize(hsv_to_rgb(color));
            format!("#{:02x}{:02x}{:02x}", rgb.r(), rgb.g(), rgb.b())
        }
        Dialect::Hex | Dialect::Rgb => {
            let rgb = denormalize(hsv_to_rgb(color));
            if opaque {
                format!("rgb({},{},{})", rgb.r(), rgb.g(), rgb.b())
            } else {
                format!(
                    "rgba({},{},{},{})",
                    rgb.r(),
                    rgb.g(),
                    rgb.b(),
                    alpha_text(color.a())
                )
            }
        }
    }
}

/// Alpha rounded half away from zero to two decimals.
fn alpha_text(a: f64) -> String {
    format!("{:.2}", (a * 100.0).round() / 100.0)
}
