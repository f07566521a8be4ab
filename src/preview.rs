//! Derived colors a picker paints around the selected color.

use serde::{Deserialize, Serialize};

use crate::color::{Hsva, Rgba8};
use crate::constants::{DARK_TEXT_ALPHA, DARK_TEXT_LUMA};
use crate::math::hsv_to_rgb;
use crate::quantize::denormalize;

/// Text color that stays readable over a color swatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextTone {
    Black,
    White,
}

/// The pure hue of `color` at full saturation and brightness, opaque.
/// This is what a hue slider thumb shows.
pub fn hue_swatch(color: Hsva) -> Rgba8 {
    denormalize(hsv_to_rgb(Hsva::opaque(color.h(), 1.0, 1.0)))
}

/// `color` with its alpha dropped, e.g. the solid end of an alpha gradient.
pub fn opaque(color: Hsva) -> Rgba8 {
    denormalize(hsv_to_rgb(color.with_alpha(1.0)))
}

/// Perceived brightness on the 0–255 scale (ITU-R BT.601 weights).
pub fn luma(color: Rgba8) -> u32 {
    let weighted = color.r() as u32 * 299 + color.g() as u32 * 587 + color.b() as u32 * 114;
    (weighted as f64 / 1000.0).round() as u32
}

/// Pick black text for light or mostly transparent colors, white otherwise.
pub fn text_tone(color: Hsva) -> TextTone {
    let rgb = denormalize(hsv_to_rgb(color));
    if luma(rgb) >= DARK_TEXT_LUMA || color.a() < DARK_TEXT_ALPHA {
        TextTone::Black
    } else {
        TextTone::White
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hue_swatch_ignores_saturation_value_and_alpha() {
        let c = Hsva::new(2.0 / 3.0, 0.1, 0.2, 0.3);
        assert_eq!(hue_swatch(c), Rgba8::opaque(0, 0, 255));
    }

    #[test]
    fn opaque_drops_alpha_only() {
        let c = Hsva::new(0.0, 1.0, 1.0, 0.2);
        assert_eq!(opaque(c), Rgba8::opaque(255, 0, 0));
    }

    #[test]
    fn luma_weights() {
        assert_eq!(luma(Rgba8::opaque(255, 255, 255)), 255);
        assert_eq!(luma(Rgba8::opaque(0, 0, 0)), 0);
        // 255 * 587 / 1000 = 149.685
        assert_eq!(luma(Rgba8::opaque(0, 255, 0)), 150);
    }

    #[test]
    fn tone_follows_brightness() {
        assert_eq!(text_tone(Hsva::opaque(0.0, 0.0, 1.0)), TextTone::Black);
        assert_eq!(text_tone(Hsva::opaque(0.0, 0.0, 0.0)), TextTone::White);
        assert_eq!(text_tone(Hsva::opaque(2.0 / 3.0, 1.0, 1.0)), TextTone::White);
        assert_eq!(text_tone(Hsva::opaque(1.0 / 6.0, 1.0, 1.0)), TextTone::Black);
    }

    #[test]
    fn transparent_colors_get_black_text() {
        assert_eq!(text_tone(Hsva::new(0.0, 0.0, 0.0, 0.3)), TextTone::Black);
        assert_eq!(text_tone(Hsva::new(0.0, 0.0, 0.0, 0.35)), TextTone::White);
    }
}
