//! Secondary index for handle resolution
//!
//! The trie index never holds items, only their [`InsertionSeq`]. This
//! index maps each live sequence number back to the id that owns it so a
//! candidate set can be resolved against the store in O(1) per handle.

use rustc_hash::FxHashMap;
use typeahead_core::InsertionSeq;

/// Secondary index: InsertionSeq → item id
#[derive(Debug, Default)]
pub struct SeqIndex {
    index: FxHashMap<InsertionSeq, String>,
}

impl SeqIndex {
    /// Create a new empty SeqIndex
    pub fn new() -> Self {
        Self {
            index: FxHashMap::default(),
        }
    }

    /// Record that `seq` belongs to item `id`
    pub fn insert(&mut self, seq: InsertionSeq, id: String) {
        self.index.insert(seq, id);
    }

    /// Forget `seq`
    ///
    /// Returns the id it pointed to, if any.
    pub fn remove(&mut self, seq: &InsertionSeq) -> Option<String> {
        self.index.remove(seq)
    }

    /// Get the id for a sequence number
    pub fn get(&self, seq: &InsertionSeq) -> Option<&str> {
        self.index.get(seq).map(String::as_str)
    }

    /// Check if the index is empty
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Number of live sequence numbers
    pub fn len(&self) -> usize {
        self.index.len()
    }
}
