//! Option types shared by the model and the native control.

use serde::{Deserialize, Serialize};

/// Non-owning handle to an option of the native control (its document index).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NativeOptionRef(pub usize);

/// Handle to a visual row in the option list.
///
/// Rows exist only for options with a non-empty value, so a `RowId` is not
/// the same as an option index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RowId(pub usize);

/// An option as reported by the native control at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NativeOption {
    /// Submitted value
    pub value: String,
    /// Display label
    pub label: String,
    /// Native selectedness
    pub selected: bool,
}

impl NativeOption {
    /// Create an unselected option.
    #[must_use]
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            selected: false,
        }
    }

    /// Set selected state.
    #[must_use]
    pub const fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }
}

/// A selectable choice held by a [`Control`](crate::Control).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    /// Unique value for this option
    pub value: String,
    /// Display label
    pub label: String,
    /// Whether this option is the selected one
    pub selected: bool,
    /// Back-reference to the native option
    pub element: NativeOptionRef,
}

impl SelectOption {
    pub(crate) fn from_native(native: NativeOption, index: usize) -> Self {
        Self {
            value: native.value,
            label: native.label,
            selected: native.selected,
            element: NativeOptionRef(index),
        }
    }

    /// Whether this option gets a visual row.
    ///
    /// Empty values are placeholders: they stay in the model but are not
    /// rendered in the list.
    #[must_use]
    pub fn has_row(&self) -> bool {
        !self.value.is_empty()
    }

    /// Case-insensitive label prefix match. `prefix` must already be lowercase.
    #[must_use]
    pub fn label_starts_with(&self, prefix: &str) -> bool {
        self.label.to_lowercase().starts_with(prefix)
    }
}
