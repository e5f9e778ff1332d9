//! Output enum for command execution results.
//!
//! Every command produces exactly one output type.

use serde::{Deserialize, Serialize};
use typeahead_core::InsertionSeq;

/// Successful command execution results.
///
/// Each [`Command`](crate::Command) variant maps to exactly one `Output` variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Output {
    /// Item stored under this insertion sequence
    Added(InsertionSeq),

    /// Whether the deleted id existed
    Deleted(bool),

    /// Matching ids, best first
    Results(Vec<String>),
}
