//! Picker configuration: output dialect and fallback color.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::color::Hsva;
use crate::constants::DEFAULT_COLOR;
use crate::format::{format, Dialect};
use crate::parse::parse;

/// How a picker turns text into colors and colors back into text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// Dialect of formatted output.
    pub dialect: Dialect,
    /// Color used when input is not a recognized color string.
    pub fallback: String,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            dialect: Dialect::Hex,
            fallback: DEFAULT_COLOR.to_string(),
        }
    }
}

impl PickerConfig {
    pub fn with_dialect(dialect: Dialect) -> Self {
        Self {
            dialect,
            ..Self::default()
        }
    }

    /// Parse `text`, falling back to the configured color and then to
    /// opaque black.
    pub fn resolve(&self, text: &str) -> Hsva {
        match parse(text) {
            Ok(color) => color,
            Err(err) => {
                debug!(input = text, %err, fallback = %self.fallback, "using fallback color");
                self.fallback_color()
            }
        }
    }

    /// The configured fallback as a color.
    pub fn fallback_color(&self) -> Hsva {
        parse(&self.fallback).unwrap_or_else(|err| {
            warn!(fallback = %self.fallback, %err, "configured fallback is not a color");
            Hsva::default()
        })
    }

    /// Format `color` in the configured dialect.
    pub fn render(&self, color: Hsva) -> String {
        format(color, self.dialect)
    }

    /// Normalize any accepted color string into the configured dialect.
    pub fn reformat(&self, text: &str) -> String {
        self.render(self.resolve(text))
    }
}
