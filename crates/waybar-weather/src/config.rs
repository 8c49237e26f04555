use serde::Deserialize;
use std::path::Path;

use crate::payload::{StatusPayload, DEFAULT_CLASS, DEFAULT_TEXT, DEFAULT_TOOLTIP};

fn default_text() -> String {
    DEFAULT_TEXT.to_string()
}

fn default_tooltip() -> String {
    DEFAULT_TOOLTIP.to_string()
}

fn default_class() -> String {
    DEFAULT_CLASS.to_string()
}

/// Payload overrides loaded from a YAML file.
///
/// Every key is optional; anything left out keeps the built-in value.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Text shown in the bar
    #[serde(default = "default_text")]
    pub text: String,
    /// Text shown on hover
    #[serde(default = "default_tooltip")]
    pub tooltip: String,
    /// CSS class for styling
    #[serde(default = "default_class")]
    pub class: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            text: default_text(),
            tooltip: default_tooltip(),
            class: default_class(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::IoError(format!("{}: {}", path.display(), e)))?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        // An empty document means "no overrides".
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Build the payload, rejecting empty values.
    pub fn into_payload(self) -> Result<StatusPayload, ConfigError> {
        let payload = StatusPayload::new(self.text, self.tooltip, self.class);
        payload
            .validate()
            .map_err(|e| ConfigError::ValidationError(e.to_string()))?;
        Ok(payload)
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
}
