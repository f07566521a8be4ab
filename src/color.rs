//! Canonical color value types.
//!
//! Float channels live in the 0.0–1.0 range and hue is a fraction of a full
//! turn in [0, 1). Constructors clamp (and wrap hue), so every value that
//! exists is in range. Deserialization goes through the same constructors.

use serde::{Deserialize, Serialize};

/// Clamp into 0.0–1.0. NaN becomes 0.
pub(crate) fn unit(x: f64) -> f64 {
    if x.is_nan() {
        0.0
    } else {
        x.clamp(0.0, 1.0)
    }
}

/// Wrap a hue into [0, 1). Non-finite hues become 0.
pub(crate) fn wrap_hue(h: f64) -> f64 {
    if !h.is_finite() {
        return 0.0;
    }
    let w = h.rem_euclid(1.0);
    // rem_euclid rounds tiny negative inputs up to exactly 1.0
    if w >= 1.0 {
        0.0
    } else {
        w
    }
}

fn opaque_alpha() -> f64 {
    1.0
}

/// HSV color with alpha. The canonical representation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawHsva")]
pub struct Hsva {
    h: f64,
    s: f64,
    v: f64,
    a: f64,
}

#[derive(Deserialize)]
struct RawHsva {
    h: f64,
    s: f64,
    v: f64,
    #[serde(default = "opaque_alpha")]
    a: f64,
}

impl From<RawHsva> for Hsva {
    fn from(raw: RawHsva) -> Self {
        Self::new(raw.h, raw.s, raw.v, raw.a)
    }
}

impl Hsva {
    pub fn new(h: f64, s: f64, v: f64, a: f64) -> Self {
        Self {
            h: wrap_hue(h),
            s: unit(s),
            v: unit(v),
            a: unit(a),
        }
    }

    /// Create with full opacity.
    pub fn opaque(h: f64, s: f64, v: f64) -> Self {
        Self::new(h, s, v, 1.0)
    }

    /// Hue as a fraction of a turn, [0, 1).
    pub fn h(&self) -> f64 {
        self.h
    }
    /// Saturation (0.0–1.0).
    pub fn s(&self) -> f64 {
        self.s
    }
    /// Value, i.e. brightness (0.0–1.0).
    pub fn v(&self) -> f64 {
        self.v
    }
    /// Alpha (0.0–1.0).
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Copy with a different alpha.
    pub fn with_alpha(self, a: f64) -> Self {
        Self::new(self.h, self.s, self.v, a)
    }
}

impl Default for Hsva {
    /// Opaque black.
    fn default() -> Self {
        Self::opaque(0.0, 0.0, 0.0)
    }
}

/// HSL color with alpha.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawHsla")]
pub struct Hsla {
    h: f64,
    s: f64,
    l: f64,
    a: f64,
}

#[derive(Deserialize)]
struct RawHsla {
    h: f64,
    s: f64,
    l: f64,
    #[serde(default = "opaque_alpha")]
    a: f64,
}

impl From<RawHsla> for Hsla {
    fn from(raw: RawHsla) -> Self {
        Self::new(raw.h, raw.s, raw.l, raw.a)
    }
}

impl Hsla {
    pub fn new(h: f64, s: f64, l: f64, a: f64) -> Self {
        Self {
            h: wrap_hue(h),
            s: unit(s),
            l: unit(l),
            a: unit(a),
        }
    }

    pub fn opaque(h: f64, s: f64, l: f64) -> Self {
        Self::new(h, s, l, 1.0)
    }

    pub fn h(&self) -> f64 {
        self.h
    }
    pub fn s(&self) -> f64 {
        self.s
    }
    pub fn l(&self) -> f64 {
        self.l
    }
    pub fn a(&self) -> f64 {
        self.a
    }
}

/// Normalized RGBA color, every channel 0.0–1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawRgba")]
pub struct Rgba {
    r: f64,
    g: f64,
    b: f64,
    a: f64,
}

#[derive(Deserialize)]
struct RawRgba {
    r: f64,
    g: f64,
    b: f64,
    #[serde(default = "opaque_alpha")]
    a: f64,
}

impl From<RawRgba> for Rgba {
    fn from(raw: RawRgba) -> Self {
        Self::new(raw.r, raw.g, raw.b, raw.a)
    }
}

impl Rgba {
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self {
            r: unit(r),
            g: unit(g),
            b: unit(b),
            a: unit(a),
        }
    }

    pub fn opaque(r: f64, g: f64, b: f64) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Red component (0.0–1.0).
    pub fn r(&self) -> f64 {
        self.r
    }
    /// Green component (0.0–1.0).
    pub fn g(&self) -> f64 {
        self.g
    }
    /// Blue component (0.0–1.0).
    pub fn b(&self) -> f64 {
        self.b
    }
    /// Alpha component (0.0–1.0).
    pub fn a(&self) -> f64 {
        self.a
    }
}

/// Denormalized RGBA color: 0–255 integer channels, alpha still 0.0–1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawRgba8")]
pub struct Rgba8 {
    r: u8,
    g: u8,
    b: u8,
    a: f64,
}

#[derive(Deserialize)]
struct RawRgba8 {
    r: u8,
    g: u8,
    b: u8,
    #[serde(default = "opaque_alpha")]
    a: f64,
}

impl From<RawRgba8> for Rgba8 {
    fn from(raw: RawRgba8) -> Self {
        Self::new(raw.r, raw.g, raw.b, raw.a)
    }
}

impl Rgba8 {
    pub fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a: unit(a) }
    }

    /// Create from 0–255 RGB values with full opacity.
    pub fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 1.0)
    }

    pub fn r(&self) -> u8 {
        self.r
    }
    pub fn g(&self) -> u8 {
        self.g
    }
    pub fn b(&self) -> u8 {
        self.b
    }
    pub fn a(&self) -> f64 {
        self.a
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_clamp_channels() {
        let c = Hsva::new(0.25, 1.5, -0.2, 2.0);
        assert_eq!(c.s(), 1.0);
        assert_eq!(c.v(), 0.0);
        assert_eq!(c.a(), 1.0);

        let rgb = Rgba::new(-1.0, 0.5, f64::NAN, 0.3);
        assert_eq!((rgb.r(), rgb.g(), rgb.b(), rgb.a()), (0.0, 0.5, 0.0, 0.3));
    }

    #[test]
    fn hue_wraps_modulo_one_turn() {
        assert_eq!(Hsva::opaque(1.0, 1.0, 1.0).h(), 0.0);
        assert!((Hsva::opaque(1.25, 1.0, 1.0).h() - 0.25).abs() < 1e-12);
        assert!((Hsla::opaque(-0.25, 1.0, 0.5).h() - 0.75).abs() < 1e-12);
        assert_eq!(Hsva::opaque(-1e-20, 1.0, 1.0).h(), 0.0);
        assert_eq!(Hsva::opaque(f64::INFINITY, 1.0, 1.0).h(), 0.0);
    }

    #[test]
    fn default_is_opaque_black() {
        let c = Hsva::default();
        assert_eq!((c.h(), c.s(), c.v(), c.a()), (0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn deserialize_clamps_and_defaults_alpha() {
        let c: Hsva = serde_json::from_str(r#"{"h":1.5,"s":2.0,"v":0.5}"#).unwrap();
        assert!((c.h() - 0.5).abs() < 1e-12);
        assert_eq!(c.s(), 1.0);
        assert_eq!(c.a(), 1.0);

        let c: Rgba8 = serde_json::from_str(r#"{"r":255,"g":0,"b":7,"a":3.0}"#).unwrap();
        assert_eq!(c, Rgba8::new(255, 0, 7, 1.0));

        assert!(serde_json::from_str::<Rgba8>(r#"{"r":256,"g":0,"b":0}"#).is_err());
    }

    #[test]
    fn serialize_uses_channel_names() {
        let json = serde_json::to_value(Hsla::new(0.5, 0.25, 0.75, 0.5)).unwrap();
        assert_eq!(json, serde_json::json!({"h": 0.5, "s": 0.25, "l": 0.75, "a": 0.5}));
    }
}
