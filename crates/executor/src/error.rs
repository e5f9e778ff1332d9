//! Error types for command parsing and execution.
//!
//! All errors from command execution are represented by the [`Error`] enum.
//! These errors are:
//! - **Structured**: Each variant has typed fields for error details
//! - **Serializable**: Can be converted to/from JSON

use serde::{Deserialize, Serialize};

/// Command errors.
///
/// # Categories
///
/// | Category | Variants | Description |
/// |----------|----------|-------------|
/// | Input | `Parse` | Malformed command line |
/// | Not Found | `NotFound` | Item doesn't exist |
/// | Input | `InvalidInput` | Value rejected by the engine |
/// | System | `Internal` | Bug or invariant violation |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
pub enum Error {
    /// Malformed command line
    #[error("parse error: {reason}")]
    Parse { reason: String },

    /// Item not found
    #[error("item not found: {id}")]
    NotFound { id: String },

    /// Value rejected below the parser
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    /// Internal error (bug or invariant violation)
    #[error("internal error: {reason}")]
    Internal { reason: String },
}

impl Error {
    /// Shorthand for [`Error::Parse`]
    pub(crate) fn parse(reason: impl Into<String>) -> Self {
        Error::Parse {
            reason: reason.into(),
        }
    }
}

impl From<typeahead_core::Error> for Error {
    fn from(e: typeahead_core::Error) -> Self {
        use typeahead_core::Error as CoreError;
        match e {
            CoreError::NotFound(id) => Error::NotFound { id },
            CoreError::InvalidItemType(t) => Error::Parse {
                reason: format!("unknown item type '{}'", t),
            },
            CoreError::InvalidInput(reason) => Error::InvalidInput { reason },
            CoreError::Internal(reason) => Error::Internal { reason },
        }
    }
}
