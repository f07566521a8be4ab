//! Conversions into Floem's paint color, so a Floem picker view can draw
//! engine output directly.

use floem::peniko::Color;

use crate::color::{Hsva, Rgba8};
use crate::math::hsv_to_rgb;
use crate::quantize::{channel_to_u8, denormalize};

impl From<Rgba8> for Color {
    fn from(c: Rgba8) -> Self {
        Color::rgba8(c.r(), c.g(), c.b(), channel_to_u8(c.a()))
    }
}

impl From<Hsva> for Color {
    fn from(c: Hsva) -> Self {
        denormalize(hsv_to_rgb(c)).into()
    }
}

#[cfg(all(test, feature = "floem"))]
mod tests {
    use super::*;

    #[test]
    fn alpha_is_scaled_to_a_byte() {
        assert_eq!(Color::from(Rgba8::new(255, 0, 0, 0.5)), Color::rgba8(255, 0, 0, 128));
        assert_eq!(Color::from(Rgba8::new(1, 2, 3, 0.0)), Color::rgba8(1, 2, 3, 0));
    }

    #[test]
    fn hsva_paints_its_rgb() {
        assert_eq!(Color::from(Hsva::opaque(0.0, 1.0, 1.0)), Color::rgba8(255, 0, 0, 255));
        assert_eq!(
            Color::from(Hsva::new(2.0 / 3.0, 1.0, 1.0, 0.25)),
            Color::rgba8(0, 0, 255, 64)
        );
    }
}
