//! Input events for a control.

use serde::{Deserialize, Serialize};

/// Modifier keys held during a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Modifiers {
    /// Control key
    pub ctrl: bool,
    /// Alt/Option key
    pub alt: bool,
    /// Meta/Command key
    pub meta: bool,
}

impl Modifiers {
    /// No modifiers held.
    pub const NONE: Self = Self {
        ctrl: false,
        alt: false,
        meta: false,
    };

    /// Whether any modifier is held.
    #[must_use]
    pub const fn any(self) -> bool {
        self.ctrl || self.alt || self.meta
    }
}

/// Keys a control reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    /// Toggles the list
    Space,
    /// Previous option
    ArrowUp,
    /// Next option
    ArrowDown,
    /// Closes the list
    Enter,
    /// Closes the list
    Escape,
    /// A printable character, fed to type-ahead search
    Char(char),
    /// Anything else; ignored
    Other,
}

impl Key {
    /// Map a browser key press to a [`Key`].
    ///
    /// Control keys are matched on the physical `code`; everything else goes
    /// by the produced `key` text, which must be a single printable character
    /// typed without Ctrl/Alt/Meta.
    #[must_use]
    pub fn from_dom(code: &str, key: &str, modifiers: Modifiers) -> Self {
        match code {
            "Space" => Self::Space,
            "ArrowUp" => Self::ArrowUp,
            "ArrowDown" => Self::ArrowDown,
            "Enter" => Self::Enter,
            "Escape" => Self::Escape,
            _ if modifiers.any() => Self::Other,
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if !c.is_control() => Self::Char(c),
                    _ => Self::Other,
                }
            }
        }
    }
}

/// An interaction delivered to a control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectEvent {
    /// Label region clicked
    LabelClick,
    /// Option row activated
    RowClick {
        /// Value of the activated row
        value: String,
    },
    /// Control lost focus
    FocusOut,
    /// Key pressed while focused
    KeyDown {
        /// Key pressed
        key: Key,
    },
}

impl SelectEvent {
    /// Shorthand for a key press.
    #[must_use]
    pub const fn key(key: Key) -> Self {
        Self::KeyDown { key }
    }

    /// Shorthand for a row activation.
    #[must_use]
    pub fn row(value: impl Into<String>) -> Self {
        Self::RowClick {
            value: value.into(),
        }
    }
}
