//! Typeahead engine
//!
//! This crate owns the mutable state and keeps the layers consistent:
//! - Engine: item store + trie index + insertion counter behind one RwLock
//! - Config: `typeahead.toml` loading (id boost policy, full-sort threshold)
//!
//! The engine is the only component that knows about:
//! - Pairing store mutations with trie mutations
//! - Assigning insertion sequence numbers
//! - Reader/writer exclusion between queries and mutations

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod engine;

pub use config::{TypeaheadConfig, CONFIG_FILE_NAME};
pub use engine::{Engine, EngineStats};

// Re-export the query-side types callers need to talk to the engine
pub use typeahead_search::{Boost, BoostTarget, Boosts, IdBoostPolicy, ScoredItem};
