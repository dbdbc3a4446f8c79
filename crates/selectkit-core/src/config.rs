//! Control configuration.
//!
//! All fields have defaults matching the stock markup contract, so an empty
//! document is a valid configuration:
//!
//! ```
//! use selectkit_core::SelectConfig;
//!
//! let config = SelectConfig::from_toml("debounce_ms = 300").unwrap();
//! assert_eq!(config.debounce_ms, 300);
//! assert_eq!(config.classes.container, "custom-select-container");
//! ```

use crate::error::SelectError;
use serde::{Deserialize, Serialize};

/// Default type-ahead inactivity window.
pub const DEFAULT_DEBOUNCE_MS: u32 = 500;

/// Structural class names of the produced markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassNames {
    /// Visual container
    pub container: String,
    /// Label-display region
    pub value: String,
    /// Option-row list
    pub options: String,
    /// Each option row
    pub option: String,
    /// Marker on the selected row
    pub selected: String,
    /// Marker on the list while open
    pub show: String,
}

impl Default for ClassNames {
    fn default() -> Self {
        Self {
            container: "custom-select-container".to_string(),
            value: "custom-select-value".to_string(),
            options: "custom-select-options".to_string(),
            option: "custom-select-option".to_string(),
            selected: "selected".to_string(),
            show: "show".to_string(),
        }
    }
}

/// Icon annotation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IconConfig {
    /// Attribute on the native control that enables icons
    pub attribute: String,
    /// Class present on every icon element
    pub base_class: String,
    /// Prefix joined with the option value to form the per-option class
    pub class_prefix: String,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            attribute: "data-icon".to_string(),
            base_class: "icon".to_string(),
            class_prefix: "icon-".to_string(),
        }
    }
}

/// Configuration of one control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectConfig {
    /// Type-ahead buffer reset window in milliseconds
    pub debounce_ms: u32,
    /// Markup class names
    pub classes: ClassNames,
    /// Icon settings
    pub icon: IconConfig,
}

impl Default for SelectConfig {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            classes: ClassNames::default(),
            icon: IconConfig::default(),
        }
    }
}

impl SelectConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the type-ahead window.
    #[must_use]
    pub const fn debounce_ms(mut self, ms: u32) -> Self {
        self.debounce_ms = ms;
        self
    }

    /// Parse from TOML.
    pub fn from_toml(source: &str) -> Result<Self, SelectError> {
        toml::from_str(source).map_err(|e| SelectError::Config(e.to_string()))
    }

    /// Parse from JSON.
    pub fn from_json(source: &str) -> Result<Self, SelectError> {
        serde_json::from_str(source).map_err(|e| SelectError::Config(e.to_string()))
    }
}
