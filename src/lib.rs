//! # picker-core
//!
//! The color engine behind a color picker widget: conversions between HSV,
//! HSL and RGB, parsing of `#rrggbb` / `rgb[a](...)` / `hsl[a](...)` strings,
//! and formatting back to text.
//!
//! Everything is a pure function over small `Copy` values. The canonical
//! representation is [`Hsva`]; parsing funnels into it and formatting starts
//! from it. The engine holds no "current color": a picker keeps its own and
//! feeds edits through [`apply`].
//!
//! ## Usage
//!
//! ```rust
//! use picker_core::{apply, format, parse, Channel, ChannelUpdate, Dialect};
//!
//! let red = parse("#ff0000").unwrap();
//! assert_eq!(format(red, Dialect::Hsl), "hsl(0,100%,50%)");
//!
//! let translucent = apply(red, ChannelUpdate::new(Channel::Alpha, 0.5));
//! assert_eq!(format(translucent, Dialect::Hex), "rgba(255,0,0,0.50)");
//! ```

mod channel;
mod color;
mod config;
pub mod constants;
mod format;
#[cfg(feature = "floem")]
mod interop;
mod math;
mod parse;
mod preview;
mod quantize;

pub use channel::{apply, apply_area, Channel, ChannelUpdate};
pub use color::{Hsla, Hsva, Rgba, Rgba8};
pub use config::PickerConfig;
pub use format::{format, Dialect};
pub use math::{hsl_to_hsv, hsl_to_rgb, hsv_to_hsl, hsv_to_rgb, rgb_to_hsl, rgb_to_hsv};
pub use parse::{is_hex_color, parse, ParseError};
pub use preview::{hue_swatch, luma, opaque, text_tone, TextTone};
pub use quantize::{denormalize, normalize};
