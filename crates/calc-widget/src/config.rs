//! Widget configuration
//!
//! Prompts and messages default to the values the widget has always shown;
//! a config file only needs the keys it changes.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::core::{parse_operand, CalcError, OperandSlot};

/// Default tracing filter for frontends that install a subscriber
pub const DEFAULT_LOG_FILTER: &str = "calc_widget=info";

/// Errors raised while loading a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read
    #[error("failed to read config {path}: {source}")]
    Io {
        /// Path that was read
        path: String,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
    /// JSON did not deserialize
    #[error("invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),
    /// YAML did not deserialize
    #[error("invalid YAML config: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
    /// The file extension is neither JSON nor YAML
    #[error("unsupported config format: {0}")]
    UnsupportedFormat(String),
    /// A value failed validation
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Calculator widget configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Prompt for the first operand
    pub first_placeholder: String,
    /// Prompt for the second operand
    pub second_placeholder: String,
    /// Result text when dividing by zero
    pub divide_by_zero_message: String,
    /// Result text for the square root of a negative number
    pub negative_root_message: String,
    /// Tracing filter used when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            first_placeholder: OperandSlot::First.default_placeholder().to_string(),
            second_placeholder: OperandSlot::Second.default_placeholder().to_string(),
            divide_by_zero_message: CalcError::DivideByZero.to_string(),
            negative_root_message: CalcError::NegativeSquareRoot.to_string(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl CalculatorConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set both placeholder prompts
    #[must_use]
    pub fn with_placeholders(mut self, first: &str, second: &str) -> Self {
        self.first_placeholder = first.to_string();
        self.second_placeholder = second.to_string();
        self
    }

    /// Set the divide-by-zero message
    #[must_use]
    pub fn with_divide_by_zero_message(mut self, message: &str) -> Self {
        self.divide_by_zero_message = message.to_string();
        self
    }

    /// Set the negative square root message
    #[must_use]
    pub fn with_negative_root_message(mut self, message: &str) -> Self {
        self.negative_root_message = message.to_string();
        self
    }

    /// Set the default log filter
    #[must_use]
    pub fn with_log_filter(mut self, filter: &str) -> Self {
        self.log_filter = filter.to_string();
        self
    }

    /// Placeholder prompt for a slot
    #[must_use]
    pub fn placeholder(&self, slot: OperandSlot) -> &str {
        match slot {
            OperandSlot::First => &self.first_placeholder,
            OperandSlot::Second => &self.second_placeholder,
        }
    }

    /// Checks that the configuration can drive a widget
    pub fn validate(&self) -> Result<(), ConfigError> {
        for slot in OperandSlot::ALL {
            if self.placeholder(slot).trim().is_empty() {
                return Err(ConfigError::Invalid(format!(
                    "{slot} placeholder must not be empty"
                )));
            }
            // a reset widget must fall back again on the next press
            if parse_operand(slot, self.placeholder(slot)).is_ok() {
                return Err(ConfigError::Invalid(format!(
                    "{slot} placeholder must not parse as a number"
                )));
            }
        }
        if self.first_placeholder == self.second_placeholder {
            return Err(ConfigError::Invalid(
                "placeholders must differ between operands".to_string(),
            ));
        }
        Ok(())
    }

    /// Parses a JSON configuration
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Parses a YAML configuration
    pub fn from_yaml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml_ng::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a configuration file, picking the format from its extension
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        let config = match extension.as_str() {
            "json" => Self::from_json_str(&text)?,
            "yaml" | "yml" => Self::from_yaml_str(&text)?,
            other => return Err(ConfigError::UnsupportedFormat(other.to_string())),
        };

        info!(path = %path.display(), "loaded calculator config");
        Ok(config)
    }

    /// Serializes to pretty JSON
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
