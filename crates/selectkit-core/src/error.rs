//! Error types for selectkit.

use thiserror::Error;

/// Errors raised by a [`Control`](crate::Control) or its configuration.
///
/// Every fallible operation leaves the control untouched when it returns
/// one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectError {
    /// No option carries the requested value.
    #[error("unknown option value: {0:?}")]
    UnknownValue(String),

    /// The native control has no options to choose from.
    #[error("native control has no options")]
    NoOptions,

    /// Two options share the same value.
    #[error("duplicate option value: {0:?}")]
    DuplicateValue(String),

    /// Configuration could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(String),
}
