//! ItemStore: authoritative owner of every live item
//!
//! # Ownership
//!
//! The store is the only place an [`Item`] value lives. Indexes refer to
//! items through their [`InsertionSeq`] and resolve it here with
//! [`ItemStore::resolve`]. Callers removing an item get it back by value so
//! they can evict its index entries before it is dropped.
//!
//! # Overwrites
//!
//! [`ItemStore::put`] on an existing id returns the replaced item. The store
//! does not know about the trie; the engine is responsible for evicting the
//! old item's index entries before indexing the new one.

use rustc_hash::FxHashMap;
use tracing::trace;
use typeahead_core::{Error, InsertionSeq, Item, Result};

use crate::index::SeqIndex;

/// In-memory item store keyed by item id
#[derive(Debug, Default)]
pub struct ItemStore {
    /// id -> item
    items: FxHashMap<String, Item>,
    /// insertion_seq -> id, kept in lock-step with `items`
    by_seq: SeqIndex,
}

impl ItemStore {
    /// Create an empty store
    pub fn new() -> Self {
        ItemStore {
            items: FxHashMap::default(),
            by_seq: SeqIndex::new(),
        }
    }

    /// Insert or overwrite the entry for `item.id`
    ///
    /// Returns the previous item stored under the same id, if any.
    pub fn put(&mut self, item: Item) -> Option<Item> {
        trace!(id = %item.id, seq = %item.insertion_seq, "store put");
        let item_seq = item.insertion_seq;
        self.by_seq.insert(item_seq, item.id.clone());
        let previous = self.items.insert(item.id.clone(), item);
        if let Some(old) = &previous {
            if old.insertion_seq != item_seq {
                self.by_seq.remove(&old.insertion_seq);
            }
        }
        previous
    }

    /// Delete and return the item with the given id
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no live item has this id.
    pub fn remove(&mut self, id: &str) -> Result<Item> {
        let item = self.items.remove(id).ok_or_else(|| Error::not_found(id))?;
        self.by_seq.remove(&item.insertion_seq);
        trace!(id, seq = %item.insertion_seq, "store remove");
        Ok(item)
    }

    /// Read-only lookup by id
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no live item has this id.
    pub fn get(&self, id: &str) -> Result<&Item> {
        self.items.get(id).ok_or_else(|| Error::not_found(id))
    }

    /// Resolve an index handle to the live item it refers to
    pub fn resolve(&self, seq: InsertionSeq) -> Option<&Item> {
        let id = self.by_seq.get(&seq)?;
        self.items.get(id)
    }

    /// Check whether an item with this id is live
    pub fn contains(&self, id: &str) -> bool {
        self.items.contains_key(id)
    }

    /// Number of live items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over live items in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.values()
    }
}
