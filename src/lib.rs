//! Typeahead - in-memory prefix search with ranked, boostable results
//!
//! Items carry a type, an id, a numeric score and free text. Queries match
//! every query token as a prefix of some word in the item's text and return
//! the best `k` ids by score, newest first on ties.
//!
//! # Quick Start
//!
//! ```ignore
//! use typeahead::{parse_command, Executor, Output};
//!
//! let executor = Executor::ephemeral();
//! executor.execute(parse_command("ADD user u1 10 hello world")?)?;
//! executor.execute(parse_command("ADD topic t1 5 hello")?)?;
//!
//! let out = executor.execute(parse_command("WQUERY 2 1 topic:3 hel")?)?;
//! assert_eq!(out, Output::Results(vec!["t1".into(), "u1".into()]));
//! ```
//!
//! # Architecture
//!
//! All operations go through the [`Executor`], which dispatches typed
//! [`Command`]s to a shared [`Engine`]. The store, trie and ranking crates
//! are implementation details and are not re-exported.

pub use typeahead_executor::*;
