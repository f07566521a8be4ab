//! Ranges, thresholds and defaults shared by the engine.

/// Degrees in a full hue turn
pub const HUE_DEGREES: f64 = 360.0;

/// Upper bound of a percentage component
pub const PERCENT_MAX: f64 = 100.0;

/// Upper bound of an 8-bit channel
pub const CHANNEL_MAX: f64 = 255.0;

/// Color used when input text is not a recognized color
pub const DEFAULT_COLOR: &str = "#000000";

/// Perceived luma at or above which text over a color should be black
pub const DARK_TEXT_LUMA: u32 = 128;

/// Alpha below which text over a color should be black regardless of luma
pub const DARK_TEXT_ALPHA: f64 = 0.35;
