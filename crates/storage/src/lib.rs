//! Storage layer for typeahead
//!
//! This crate implements the authoritative item store:
//! - ItemStore: FxHashMap keyed by item id, sole owner of every `Item`
//! - SeqIndex: secondary index InsertionSeq → id, used to resolve the
//!   non-owning handles held by the trie index

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod index;
pub mod store;

pub use index::SeqIndex;
pub use store::ItemStore;
