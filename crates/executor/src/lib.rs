//! # Typeahead Executor
//!
//! The command layer of the typeahead engine.
//!
//! This is the only crate users need to import. It provides:
//! - [`Command`]/[`Output`] - the typed command interface
//! - [`parse_command`] - the `ADD`/`DEL`/`QUERY`/`WQUERY` line protocol
//! - [`Executor`] - dispatch of commands to an [`Engine`]
//! - [`run_stream`] - line-by-line processing of a whole command stream
//!
//! ## Quick Start
//!
//! ```text
//! use typeahead_executor::{parse_command, Executor, Output};
//!
//! let executor = Executor::ephemeral();
//! executor.execute(parse_command("ADD user u1 10 hello world")?)?;
//! let out = executor.execute(parse_command("QUERY 5 hel")?)?;
//! assert_eq!(out, Output::Results(vec!["u1".into()]));
//! ```
//!
//! ## Line Protocol
//!
//! | Command | Format |
//! |---------|--------|
//! | ADD | `ADD <type> <id> <score> <text...>` |
//! | DEL | `DEL <id>` |
//! | QUERY | `QUERY <k> <text...>` |
//! | WQUERY | `WQUERY <k> <numBoosts> (<key>:<factor>)* <text...>` |

#![warn(missing_docs)]

mod command;
mod error;
mod executor;
mod format;
mod output;
mod parse;
mod stream;

// Test modules
#[cfg(test)]
mod tests;

// =============================================================================
// Public API - Everything users need is re-exported here
// =============================================================================

pub use command::Command;
pub use error::Error;
pub use executor::Executor;
pub use format::{format_error, format_line_error, format_output, OutputMode};
pub use output::Output;
pub use parse::parse_command;
pub use stream::{run_stream, StreamSummary};

// Re-export engine and model types so users don't need the lower crates
pub use typeahead_core::{InsertionSeq, Item, ItemType};
pub use typeahead_engine::{
    Boost, BoostTarget, Boosts, Engine, EngineStats, IdBoostPolicy, ScoredItem, TypeaheadConfig,
    CONFIG_FILE_NAME,
};

/// Result type for executor operations
pub type Result<T> = std::result::Result<T, Error>;
