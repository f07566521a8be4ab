//! Per-channel edits.
//!
//! A picker control reports an edit as a [`ChannelUpdate`]: the channel it
//! owns and the new normalized value. [`apply`] folds the edit into an HSV
//! color, going through HSL or RGB when the channel is not native to HSV.

use serde::{Deserialize, Serialize};

use crate::color::{unit, wrap_hue, Hsla, Hsva, Rgba};
use crate::constants::{CHANNEL_MAX, HUE_DEGREES, PERCENT_MAX};
use crate::math::{hsl_to_hsv, hsv_to_hsl, hsv_to_rgb, rgb_to_hsv};

/// An editable color channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    Hue,
    /// HSV saturation
    Saturation,
    Value,
    /// HSL saturation
    HslSaturation,
    Lightness,
    Red,
    Green,
    Blue,
    Alpha,
}

impl Channel {
    /// The range a control shows this channel in: degrees, 0–255, or percent.
    pub fn display_max(self) -> f64 {
        match self {
            Channel::Hue => HUE_DEGREES,
            Channel::Red | Channel::Green | Channel::Blue => CHANNEL_MAX,
            _ => PERCENT_MAX,
        }
    }
}

/// A request to set one channel to a normalized value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChannelUpdate {
    pub channel: Channel,
    pub value: f64,
}

impl ChannelUpdate {
    /// Build an update, normalizing `value` (hue wraps, the rest clamp).
    pub fn new(channel: Channel, value: f64) -> Self {
        let value = match channel {
            Channel::Hue => wrap_hue(value),
            _ => unit(value),
        };
        Self { channel, value }
    }

    /// Build an update from a value typed in display units, e.g. `180` out of
    /// `360` for hue. Values outside `0..=max` are ignored.
    pub fn from_display(channel: Channel, raw: f64, max: f64) -> Option<Self> {
        if !raw.is_finite() || !max.is_finite() || max <= 0.0 || !(0.0..=max).contains(&raw) {
            return None;
        }
        Some(Self::new(channel, raw / max))
    }
}

/// Apply a channel edit to `color`. Alpha is kept by every non-alpha edit.
pub fn apply(color: Hsva, update: ChannelUpdate) -> Hsva {
    let (h, s, v, a) = (color.h(), color.s(), color.v(), color.a());
    let x = update.value;
    match update.channel {
        Channel::Hue => Hsva::new(x, s, v, a),
        Channel::Saturation => Hsva::new(h, x, v, a),
        Channel::Value => Hsva::new(h, s, x, a),
        Channel::Alpha => color.with_alpha(x),
        Channel::HslSaturation | Channel::Lightness => {
            let hsl = hsv_to_hsl(color);
            let hsl = if update.channel == Channel::Lightness {
                Hsla::new(hsl.h(), hsl.s(), x, a)
            } else {
                Hsla::new(hsl.h(), x, hsl.l(), a)
            };
            hsl_to_hsv(hsl)
        }
        Channel::Red | Channel::Green | Channel::Blue => {
            let rgb = hsv_to_rgb(color);
            let (r, g, b) = match update.channel {
                Channel::Red => (x, rgb.g(), rgb.b()),
                Channel::Green => (rgb.r(), x, rgb.b()),
                _ => (rgb.r(), rgb.g(), x),
            };
            rgb_to_hsv(Rgba::new(r, g, b, a))
        }
    }
}

/// Set saturation and value together, as the 2D picker area does.
pub fn apply_area(color: Hsva, saturation: f64, value: f64) -> Hsva {
    Hsva::new(color.h(), saturation, value, color.a())
}
