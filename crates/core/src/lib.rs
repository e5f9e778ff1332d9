//! Core types for the typeahead engine
//!
//! This crate defines the foundational types used throughout the system:
//! - Item: an indexed record (id, type, score, content, insertion sequence)
//! - ItemType: the fixed set of item kinds (user, topic, question, board)
//! - InsertionSeq: creation-order sequence number, doubles as the index handle
//! - Error: Error type hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{InsertionSeq, Item, ItemType};
