//! Error types for the typeahead engine
//!
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use thiserror::Error;

/// Result type alias for typeahead operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the typeahead engine
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// No live item with the given id
    #[error("Item not found: {0}")]
    NotFound(String),

    /// Item type name outside the fixed enumeration
    #[error("Invalid item type: {0}")]
    InvalidItemType(String),

    /// Malformed input (bad number, bad configuration value, ...)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Infrastructure failure outside the index (config file I/O)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Shorthand for [`Error::NotFound`]
    pub fn not_found(id: impl Into<String>) -> Self {
        Error::NotFound(id.into())
    }

    /// Shorthand for [`Error::InvalidInput`]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Error::InvalidInput(reason.into())
    }

    /// Shorthand for [`Error::Internal`]
    pub fn internal(reason: impl Into<String>) -> Self {
        Error::Internal(reason.into())
    }

    /// True if this is a [`Error::NotFound`]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }
}
