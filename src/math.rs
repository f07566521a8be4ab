//! Color math: direct conversions between HSV, HSL and RGB.
//! All channels are normalized f64 in 0.0–1.0, hue included. Alpha always
//! passes through untouched.

use crate::color::{Hsla, Hsva, Rgba};

/// HSV → HSL.
///
/// Black and white have no HSL saturation; it is reported as 0 and the hue
/// is carried through.
pub fn hsv_to_hsl(c: Hsva) -> Hsla {
    let (h, s, v) = (c.h(), c.s(), c.v());
    let l = v * (1.0 - s / 2.0);
    let denom = l.min(1.0 - l);
    let s_hsl = if denom <= 0.0 { 0.0 } else { (v - l) / denom };
    Hsla::new(h, s_hsl, l, c.a())
}

/// HSL → HSV. Black has no HSV saturation; it is reported as 0.
pub fn hsl_to_hsv(c: Hsla) -> Hsva {
    let (h, s, l) = (c.h(), c.s(), c.l());
    let v = l + s * l.min(1.0 - l);
    let s_hsv = if v <= 0.0 { 0.0 } else { 2.0 * (1.0 - l / v) };
    Hsva::new(h, s_hsv, v, c.a())
}

/// HSV → RGB.
///
/// Chroma `v * s` is spread over six sectors of 1/6 turn; `floor(h * 6) mod 6`
/// picks the sector, so each sector owns its lower edge. Zero saturation
/// means zero chroma, which leaves a gray of `v`.
pub fn hsv_to_rgb(c: Hsva) -> Rgba {
    let chroma = c.v() * c.s();
    let h6 = c.h() * 6.0;
    let rising = chroma * (1.0 - (h6.rem_euclid(2.0) - 1.0).abs());
    let (r, g, b) = match h6.floor() as u32 % 6 {
        0 => (chroma, rising, 0.0),
        1 => (rising, chroma, 0.0),
        2 => (0.0, chroma, rising),
        3 => (0.0, rising, chroma),
        4 => (rising, 0.0, chroma),
        _ => (chroma, 0.0, rising),
    };
    let m = c.v() - chroma;
    Rgba::new(r + m, g + m, b + m, c.a())
}

/// RGB → HSV.
///
/// Achromatic input (max == min) has no chroma and so no defined hue: hue and
/// saturation are both 0 and only value and alpha survive.
pub fn rgb_to_hsv(c: Rgba) -> Hsva {
    let (r, g, b) = (c.r(), c.g(), c.b());
    let max = r.max(g).max(b);
    let chroma = max - r.min(g).min(b);

    let (hue, saturation) = if chroma == 0.0 {
        (0.0, 0.0)
    } else {
        let sector = if max == r {
            (g - b) / chroma
        } else if max == g {
            (b - r) / chroma + 2.0
        } else {
            (r - g) / chroma + 4.0
        };
        // negative red-sector hues wrap inside Hsva::new
        (sector / 6.0, chroma / max)
    };

    Hsva::new(hue, saturation, max, c.a())
}

/// HSL → RGB, through HSV.
pub fn hsl_to_rgb(c: Hsla) -> Rgba {
    hsv_to_rgb(hsl_to_hsv(c))
}

/// RGB → HSL, through HSV.
pub fn rgb_to_hsl(c: Rgba) -> Hsla {
    hsv_to_hsl(rgb_to_hsv(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn assert_rgb(c: Rgba, r: f64, g: f64, b: f64) {
        assert!(
            (c.r() - r).abs() < EPS && (c.g() - g).abs() < EPS && (c.b() - b).abs() < EPS,
            "got ({}, {}, {}), want ({r}, {g}, {b})",
            c.r(),
            c.g(),
            c.b()
        );
    }

    #[test]
    fn primaries_and_secondaries() {
        assert_rgb(hsv_to_rgb(Hsva::opaque(0.0, 1.0, 1.0)), 1.0, 0.0, 0.0);
        assert_rgb(hsv_to_rgb(Hsva::opaque(1.0 / 6.0, 1.0, 1.0)), 1.0, 1.0, 0.0);
        assert_rgb(hsv_to_rgb(Hsva::opaque(2.0 / 6.0, 1.0, 1.0)), 0.0, 1.0, 0.0);
        assert_rgb(hsv_to_rgb(Hsva::opaque(0.5, 1.0, 1.0)), 0.0, 1.0, 1.0);
        assert_rgb(hsv_to_rgb(Hsva::opaque(4.0 / 6.0, 1.0, 1.0)), 0.0, 0.0, 1.0);
        assert_rgb(hsv_to_rgb(Hsva::opaque(5.0 / 6.0, 1.0, 1.0)), 1.0, 0.0, 1.0);
    }

    #[test]
    fn sector_owns_its_lower_edge() {
        // exactly 1/6 starts sector 1, where green carries the full chroma
        let c = hsv_to_rgb(Hsva::opaque(1.0 / 6.0, 0.5, 1.0));
        assert_rgb(c, 1.0, 1.0, 0.5);
    }

    #[test]
    fn rgb_to_hsv_known_values() {
        let c = rgb_to_hsv(Rgba::opaque(1.0, 0.0, 0.0));
        assert_eq!((c.h(), c.s(), c.v()), (0.0, 1.0, 1.0));

        let c = rgb_to_hsv(Rgba::opaque(0.0, 0.0, 1.0));
        assert!((c.h() - 4.0 / 6.0).abs() < EPS);

        // magenta-ish red: max == r with g < b wraps to the top of the circle
        let c = rgb_to_hsv(Rgba::opaque(1.0, 0.0, 0.5));
        assert!((c.h() - 11.0 / 12.0).abs() < EPS);
    }

    #[test]
    fn achromatic_has_zero_hue_and_saturation() {
        for v in [0.0, 0.2, 0.5, 1.0] {
            let c = rgb_to_hsv(Rgba::new(v, v, v, 0.4));
            assert_eq!((c.h(), c.s(), c.v(), c.a()), (0.0, 0.0, v, 0.4));
        }
    }

    #[test]
    fn zero_saturation_is_gray_at_any_hue() {
        for h in [0.0, 0.2, 0.5, 0.9] {
            assert_rgb(hsv_to_rgb(Hsva::opaque(h, 0.0, 0.4)), 0.4, 0.4, 0.4);
        }
    }

    #[test]
    fn hsv_hsl_known_values() {
        let hsl = hsv_to_hsl(Hsva::opaque(0.0, 1.0, 1.0));
        assert!((hsl.s() - 1.0).abs() < EPS && (hsl.l() - 0.5).abs() < EPS);

        let hsv = hsl_to_hsv(Hsla::opaque(0.5, 1.0, 0.25));
        assert!((hsv.s() - 1.0).abs() < EPS && (hsv.v() - 0.5).abs() < EPS);
    }

    #[test]
    fn degenerate_hsl_keeps_hue() {
        // white: l == 1
        let white = hsv_to_hsl(Hsva::new(0.3, 0.0, 1.0, 0.5));
        assert_eq!((white.h(), white.s(), white.l(), white.a()), (0.3, 0.0, 1.0, 0.5));
        // black: l == 0
        let black = hsv_to_hsl(Hsva::opaque(0.7, 1.0, 0.0));
        assert_eq!((black.h(), black.s(), black.l()), (0.7, 0.0, 0.0));
        // black from HSL: v == 0
        let back = hsl_to_hsv(Hsla::opaque(0.7, 0.8, 0.0));
        assert_eq!((back.h(), back.s(), back.v()), (0.7, 0.0, 0.0));
    }

    #[test]
    fn alpha_passes_through() {
        let c = Hsva::new(0.1, 0.5, 0.5, 0.25);
        assert_eq!(hsv_to_rgb(c).a(), 0.25);
        assert_eq!(hsv_to_hsl(c).a(), 0.25);
        assert_eq!(rgb_to_hsv(hsv_to_rgb(c)).a(), 0.25);
        assert_eq!(hsl_to_hsv(hsv_to_hsl(c)).a(), 0.25);
    }

    #[test]
    fn hsl_rgb_composites() {
        assert_rgb(hsl_to_rgb(Hsla::opaque(0.0, 1.0, 0.5)), 1.0, 0.0, 0.0);
        let hsl = rgb_to_hsl(Rgba::opaque(0.5, 0.5, 0.5));
        assert_eq!(hsl.s(), 0.0);
        assert!((hsl.l() - 0.5).abs() < EPS);
    }
}
