//! The native choice control a [`Control`](crate::Control) mirrors.
//!
//! Backends implement [`NativeSelect`] over their platform element. In tests
//! and non-browser hosts, [`MemoryNativeSelect`] provides an in-memory
//! stand-in.

use crate::option::{NativeOption, NativeOptionRef};

/// Access to the hidden native control.
pub trait NativeSelect {
    /// Options in document order.
    fn options(&self) -> Vec<NativeOption>;

    /// Set the selected flag of one native option.
    fn set_selected(&mut self, option: NativeOptionRef, selected: bool);

    /// Check whether the native control carries an attribute.
    fn has_attribute(&self, name: &str) -> bool;
}

/// In-memory native control.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryNativeSelect {
    options: Vec<NativeOption>,
    attributes: Vec<String>,
}

impl MemoryNativeSelect {
    /// Create an empty native control.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an unselected option.
    #[must_use]
    pub fn option(mut self, value: impl Into<String>, label: impl Into<String>) -> Self {
        self.options.push(NativeOption::new(value, label));
        self
    }

    /// Add a selected option.
    #[must_use]
    pub fn selected_option(mut self, value: impl Into<String>, label: impl Into<String>) -> Self {
        self.options.push(NativeOption::new(value, label).selected(true));
        self
    }

    /// Add an attribute, e.g. `data-icon`.
    #[must_use]
    pub fn attribute(mut self, name: impl Into<String>) -> Self {
        self.attributes.push(name.into());
        self
    }

    /// Values of every option currently flagged selected.
    #[must_use]
    pub fn selected_values(&self) -> Vec<&str> {
        self.options
            .iter()
            .filter(|o| o.selected)
            .map(|o| o.value.as_str())
            .collect()
    }

    /// Whether the option at `index` is flagged selected.
    #[must_use]
    pub fn is_selected(&self, index: usize) -> bool {
        self.options.get(index).is_some_and(|o| o.selected)
    }
}

impl NativeSelect for MemoryNativeSelect {
    fn options(&self) -> Vec<NativeOption> {
        self.options.clone()
    }

    fn set_selected(&mut self, option: NativeOptionRef, selected: bool) {
        if let Some(opt) = self.options.get_mut(option.0) {
            opt.selected = selected;
        }
    }

    fn has_attribute(&self, name: &str) -> bool {
        self.attributes.iter().any(|a| a == name)
    }
}
