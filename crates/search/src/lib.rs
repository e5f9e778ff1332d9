//! Search infrastructure for typeahead
//!
//! This crate provides:
//! - Whitespace tokenizer shared by indexing and querying
//! - TrieIndex mapping every word prefix to the items containing it
//! - Boosts: per-query multiplicative score adjustments by type or id
//! - TopK bounded selector with a full-sort fallback
//! - QueryEngine tying the above together over an `ItemStore`
//!
//! # Usage
//!
//! ```ignore
//! use typeahead_search::{Boosts, QueryEngine, QueryOptions};
//!
//! let engine = QueryEngine::new(&store, &trie, QueryOptions::default());
//! let ranked = engine.search(&Boosts::none(), 10, "hel wor");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod boost;
pub mod query;
pub mod tokenizer;
pub mod topk;
pub mod trie;

// Re-export commonly used types
pub use boost::{Boost, BoostTarget, Boosts, IdBoostPolicy};
pub use query::{QueryEngine, QueryOptions, DEFAULT_FULL_SORT_THRESHOLD};
pub use tokenizer::{tokenize, tokenize_unique};
pub use topk::{select_top_k, ScoredItem, TopK};
pub use trie::{TrieIndex, TrieNode};
