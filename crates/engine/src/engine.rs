//! Engine: the single owner of all typeahead state
//!
//! # Consistency
//!
//! The item store and trie index must agree: every prefix of every content
//! word of every live item leads to a trie node holding that item's handle.
//! Both structures live behind one `RwLock`, so:
//!
//! - ADD/DEL update store and trie under the write lock, together
//! - queries run under the read lock and never see half of a mutation
//!
//! # Overwrites
//!
//! ADD on an existing id evicts the old item's trie entries before indexing
//! the new content. The new item gets a fresh insertion sequence.
//!
//! # Thread Safety
//!
//! `Engine` is `Send + Sync`; share it with `Arc<Engine>`.

use parking_lot::RwLock;
use tracing::{debug, info};
use typeahead_core::{Error, InsertionSeq, Item, ItemType, Result};
use typeahead_search::{tokenize_unique, Boosts, QueryEngine, ScoredItem, TrieIndex};
use typeahead_storage::ItemStore;

use crate::config::TypeaheadConfig;

/// Point-in-time engine statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineStats {
    /// Live items
    pub items: usize,
    /// Allocated trie nodes
    pub trie_nodes: usize,
    /// Sequence number the next ADD will receive
    pub next_seq: InsertionSeq,
}

struct EngineState {
    store: ItemStore,
    trie: TrieIndex,
    next_seq: InsertionSeq,
}

/// In-memory typeahead engine
pub struct Engine {
    state: RwLock<EngineState>,
    config: TypeaheadConfig,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Create an empty engine with default configuration
    pub fn new() -> Self {
        Self::with_config(TypeaheadConfig::default())
    }

    /// Create an empty engine
    pub fn with_config(config: TypeaheadConfig) -> Self {
        info!(
            id_boost_policy = ?config.id_boost_policy,
            full_sort_threshold = config.full_sort_threshold,
            "typeahead engine created"
        );
        Engine {
            state: RwLock::new(EngineState {
                store: ItemStore::new(),
                trie: TrieIndex::new(),
                next_seq: InsertionSeq(0),
            }),
            config,
        }
    }

    /// Active configuration
    pub fn config(&self) -> &TypeaheadConfig {
        &self.config
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Create or overwrite an item
    ///
    /// Returns the insertion sequence assigned to the new item.
    pub fn add(
        &self,
        item_type: ItemType,
        id: impl Into<String>,
        score: f64,
        content: impl Into<String>,
    ) -> InsertionSeq {
        let id = id.into();
        let content = content.into();
        let tokens = tokenize_unique(&content);

        let mut state = self.state.write();
        let seq = state.next_seq;
        state.next_seq = seq.next();

        if let Ok(old) = state.store.remove(&id) {
            debug!(id = %id, old_seq = %old.insertion_seq, "overwriting item");
            state
                .trie
                .remove(&tokenize_unique(&old.content), old.insertion_seq);
        }
        state.trie.insert(&tokens, seq);
        state
            .store
            .put(Item::new(item_type, id.clone(), score, content, seq));

        debug!(id = %id, seq = %seq, %item_type, score, words = tokens.len(), "item added");
        seq
    }

    /// Remove an item and its index entries
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no live item has this id. Callers of
    /// the command protocol treat that as a no-op.
    pub fn delete(&self, id: &str) -> Result<Item> {
        let mut state = self.state.write();
        let item = match state.store.remove(id) {
            Ok(item) => item,
            Err(e) => {
                debug!(id, "delete of unknown id");
                return Err(e);
            }
        };
        state
            .trie
            .remove(&tokenize_unique(&item.content), item.insertion_seq);
        debug!(id, seq = %item.insertion_seq, "item deleted");
        Ok(item)
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Ranked prefix search without boosts
    pub fn query(&self, k: usize, text: &str) -> Vec<ScoredItem> {
        self.search(&Boosts::none(), k, text)
    }

    /// Ranked prefix search with boosts
    ///
    /// Boosted scores exist only in the returned copies.
    pub fn search(&self, boosts: &Boosts, k: usize, text: &str) -> Vec<ScoredItem> {
        let state = self.state.read();
        let engine = QueryEngine::new(&state.store, &state.trie, self.config.query_options());
        let results = engine.search(boosts, k, text);
        debug!(
            query = text,
            k,
            boosts = boosts.len(),
            hits = results.len(),
            "query evaluated"
        );
        results
    }

    /// Copy of the stored item with this id
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no live item has this id.
    pub fn get(&self, id: &str) -> Result<Item> {
        self.state.read().store.get(id).cloned()
    }

    // ========================================================================
    // Introspection
    // ========================================================================

    /// Number of live items
    pub fn len(&self) -> usize {
        self.state.read().store.len()
    }

    /// Check if no items are live
    pub fn is_empty(&self) -> bool {
        self.state.read().store.is_empty()
    }

    /// Current statistics
    pub fn stats(&self) -> EngineStats {
        let state = self.state.read();
        EngineStats {
            items: state.store.len(),
            trie_nodes: state.trie.node_count(),
            next_seq: state.next_seq,
        }
    }

    /// Check the store/index invariant for every live item
    ///
    /// This walks the whole index and is meant for tests and diagnostics,
    /// not the query path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Internal`] naming the first item and prefix whose
    /// trie node does not hold the item.
    pub fn verify_index(&self) -> Result<()> {
        let state = self.state.read();
        for item in state.store.iter() {
            for word in tokenize_unique(&item.content) {
                let mut prefix = String::with_capacity(word.len());
                for c in word.chars() {
                    prefix.push(c);
                    let held = state
                        .trie
                        .prefix_lookup(&prefix)
                        .is_some_and(|set| set.contains(&item.insertion_seq));
                    if !held {
                        return Err(Error::internal(format!(
                            "item '{}' missing from trie at prefix '{}'",
                            item.id, prefix
                        )));
                    }
                }
            }
            if state.store.resolve(item.insertion_seq).map(|i| &i.id) != Some(&item.id) {
                return Err(Error::internal(format!(
                    "item '{}' handle {} does not resolve",
                    item.id, item.insertion_seq
                )));
            }
        }
        Ok(())
    }
}
