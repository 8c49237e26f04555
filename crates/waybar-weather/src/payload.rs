//! The record waybar reads from a `custom` module's stdout.

use serde::Serialize;

use crate::error::EmitError;
use crate::json;

/// Text shown in the bar.
pub const DEFAULT_TEXT: &str = " 22°C";
/// Text shown on hover.
pub const DEFAULT_TOOLTIP: &str = "Montreal: 22°C - Partly Cloudy";
/// CSS class waybar attaches to the module.
pub const DEFAULT_CLASS: &str = "weather";

/// Three-field status record.
///
/// Field declaration order is the serialized key order: `text`, `tooltip`, `class`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(test, derive(serde::Deserialize))]
pub struct StatusPayload {
    /// Short display string
    pub text: String,
    /// Longer description shown on hover
    pub tooltip: String,
    /// Styling tag
    pub class: String,
}

impl StatusPayload {
    pub fn new(
        text: impl Into<String>,
        tooltip: impl Into<String>,
        class: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            tooltip: tooltip.into(),
            class: class.into(),
        }
    }

    /// The built-in weather reading.
    pub fn fixed() -> Self {
        Self::new(DEFAULT_TEXT, DEFAULT_TOOLTIP, DEFAULT_CLASS)
    }

    /// Check that every field is non-empty.
    pub fn validate(&self) -> Result<(), EmitError> {
        for (name, value) in [
            ("text", &self.text),
            ("tooltip", &self.tooltip),
            ("class", &self.class),
        ] {
            if value.is_empty() {
                return Err(EmitError::InvalidPayload(format!(
                    "`{}` must not be empty",
                    name
                )));
            }
        }
        Ok(())
    }

    /// Render as a single JSON line, without the trailing newline.
    pub fn to_line(&self) -> Result<String, EmitError> {
        Ok(json::to_spaced_string(self)?)
    }
}

impl Default for StatusPayload {
    fn default() -> Self {
        Self::fixed()
    }
}
