//! Command enum defining all typeahead operations.
//!
//! Commands are:
//! - **Self-contained**: All parameters needed for execution are in the variant
//! - **Serializable**: Can be converted to/from JSON
//! - **Already validated**: The engine does not re-check them

use serde::{Deserialize, Serialize};
use typeahead_core::ItemType;
use typeahead_engine::Boosts;

/// A command is a self-contained, serializable operation.
///
/// | Command | Output |
/// |---------|--------|
/// | `Add` | `Output::Added` |
/// | `Del` | `Output::Deleted` |
/// | `Query` | `Output::Results` |
/// | `WQuery` | `Output::Results` |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub enum Command {
    /// Create or overwrite an item.
    /// Returns: `Output::Added`
    Add {
        item_type: ItemType,
        id: String,
        score: f64,
        content: String,
    },

    /// Remove an item. Unknown ids are a no-op.
    /// Returns: `Output::Deleted` (true if the item existed)
    Del { id: String },

    /// Ranked prefix search.
    /// Returns: `Output::Results`
    Query { k: usize, query: String },

    /// Ranked prefix search with score boosts.
    /// Returns: `Output::Results`
    WQuery {
        k: usize,
        boosts: Boosts,
        query: String,
    },
}

impl Command {
    /// Protocol keyword for this command
    pub fn name(&self) -> &'static str {
        match self {
            Command::Add { .. } => "ADD",
            Command::Del { .. } => "DEL",
            Command::Query { .. } => "QUERY",
            Command::WQuery { .. } => "WQUERY",
        }
    }

    /// Whether this command mutates the engine
    pub fn is_write(&self) -> bool {
        matches!(self, Command::Add { .. } | Command::Del { .. })
    }
}
