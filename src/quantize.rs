//! Bridge between normalized float channels and 0–255 integer channels.
//!
//! Scaling rounds to the nearest integer with ties away from zero
//! (`f64::round`), so 127.5 becomes 128. Alpha is never scaled.

use crate::color::{Rgba, Rgba8};

/// Scale a normalized channel to 0–255.
pub(crate) fn channel_to_u8(c: f64) -> u8 {
    (c * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Normalized RGBA → 0–255 RGBA.
pub fn denormalize(c: Rgba) -> Rgba8 {
    Rgba8::new(
        channel_to_u8(c.r()),
        channel_to_u8(c.g()),
        channel_to_u8(c.b()),
        c.a(),
    )
}

/// 0–255 RGBA → normalized RGBA.
pub fn normalize(c: Rgba8) -> Rgba {
    Rgba::new(
        c.r() as f64 / 255.0,
        c.g() as f64 / 255.0,
        c.b() as f64 / 255.0,
        c.a(),
    )
}
