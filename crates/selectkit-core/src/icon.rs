//! Icon lookup by option value.

use crate::config::IconConfig;
use std::fmt;

/// Resolves the icon classes for an option value.
pub trait IconResolver: fmt::Debug {
    /// Class names of the icon element for `value`.
    fn icon_classes(&self, value: &str) -> Vec<String>;
}

/// Class-based icons: a shared base class plus `<prefix><value>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassIcon {
    base_class: String,
    class_prefix: String,
}

impl Default for ClassIcon {
    fn default() -> Self {
        Self::from_config(&IconConfig::default())
    }
}

impl ClassIcon {
    /// Create a resolver.
    #[must_use]
    pub fn new(base_class: impl Into<String>, class_prefix: impl Into<String>) -> Self {
        Self {
            base_class: base_class.into(),
            class_prefix: class_prefix.into(),
        }
    }

    /// Create a resolver from icon settings.
    #[must_use]
    pub fn from_config(config: &IconConfig) -> Self {
        Self::new(config.base_class.clone(), config.class_prefix.clone())
    }
}

impl IconResolver for ClassIcon {
    fn icon_classes(&self, value: &str) -> Vec<String> {
        vec![
            self.base_class.clone(),
            format!("{}{value}", self.class_prefix),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_icon_default() {
        let icons = ClassIcon::default();
        assert_eq!(icons.icon_classes("us"), vec!["icon", "icon-us"]);
    }

    #[test]
    fn test_class_icon_custom() {
        let icons = ClassIcon::new("fi", "fi-");
        assert_eq!(icons.icon_classes("uy"), vec!["fi", "fi-uy"]);
    }
}
