//! Query engine: tokenize, intersect, boost, rank
//!
//! `QueryEngine` is a borrowed view over an `ItemStore` and a `TrieIndex`.
//! It performs no mutation, so a query can be dropped at any point.
//!
//! # Pipeline
//!
//! 1. Tokenize the query (lowercase, whitespace split). No tokens, no results.
//! 2. Prefix-lookup each token and intersect the handle sets (AND).
//! 3. Resolve handles against the store and apply boosts to copies.
//! 4. Under [`IdBoostPolicy::Pin`], add id-boosted items that did not match.
//! 5. Select the top `k`.

use rustc_hash::FxHashSet;
use tracing::{trace, warn};
use typeahead_core::{InsertionSeq, Item};
use typeahead_storage::ItemStore;

use crate::boost::{Boosts, IdBoostPolicy};
use crate::tokenizer::tokenize;
use crate::topk::{select_top_k, ScoredItem};
use crate::trie::TrieIndex;

/// Default `k` at or above which ranking sorts all candidates instead of
/// using the bounded heap
pub const DEFAULT_FULL_SORT_THRESHOLD: usize = 1000;

/// Tunables for query evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryOptions {
    /// Behavior of id-keyed boosts for non-matching ids
    pub id_boost_policy: IdBoostPolicy,
    /// `k` at or above which the full-sort path is used
    pub full_sort_threshold: usize,
}

impl Default for QueryOptions {
    fn default() -> Self {
        QueryOptions {
            id_boost_policy: IdBoostPolicy::default(),
            full_sort_threshold: DEFAULT_FULL_SORT_THRESHOLD,
        }
    }
}

/// Read-only query evaluator
pub struct QueryEngine<'a> {
    store: &'a ItemStore,
    trie: &'a TrieIndex,
    options: QueryOptions,
}

impl<'a> QueryEngine<'a> {
    /// Create an engine over a store and its index
    pub fn new(store: &'a ItemStore, trie: &'a TrieIndex, options: QueryOptions) -> Self {
        QueryEngine {
            store,
            trie,
            options,
        }
    }

    /// Tokenize `query` and rank
    pub fn search(&self, boosts: &Boosts, k: usize, query: &str) -> Vec<ScoredItem> {
        self.rank(boosts, k, &tokenize(query))
    }

    /// Rank items matching every token as a word prefix, best first
    ///
    /// Never returns more than `k` items.
    pub fn rank<S: AsRef<str>>(
        &self,
        boosts: &Boosts,
        k: usize,
        tokens: &[S],
    ) -> Vec<ScoredItem> {
        if k == 0 {
            return Vec::new();
        }
        let candidates = self.candidates(tokens);
        if candidates.is_empty() {
            return Vec::new();
        }

        let mut scored: Vec<ScoredItem> = candidates
            .iter()
            .filter_map(|&seq| self.resolve(seq))
            .map(|item| boosts.apply(item))
            .collect();

        if self.options.id_boost_policy == IdBoostPolicy::Pin {
            for id in boosts.target_ids() {
                match self.store.get(id) {
                    Ok(item) if !candidates.contains(&item.insertion_seq) => {
                        trace!(id, "pinning id-boosted item");
                        scored.push(boosts.apply(item));
                    }
                    Ok(_) => {}
                    Err(_) => trace!(id, "id boost target not found"),
                }
            }
        }

        select_top_k(scored, k, self.options.full_sort_threshold)
    }

    /// Intersect per-token prefix sets
    ///
    /// Starts from the smallest set so the intersection costs
    /// O(smallest * tokens).
    pub fn candidates<S: AsRef<str>>(&self, tokens: &[S]) -> FxHashSet<InsertionSeq> {
        let mut sets = Vec::with_capacity(tokens.len());
        for token in tokens {
            match self.trie.prefix_lookup(token.as_ref()) {
                Some(set) if !set.is_empty() => sets.push(set),
                _ => return FxHashSet::default(),
            }
        }
        sets.sort_by_key(|set| set.len());

        let Some((smallest, rest)) = sets.split_first() else {
            return FxHashSet::default();
        };
        smallest
            .iter()
            .copied()
            .filter(|seq| rest.iter().all(|set| set.contains(seq)))
            .collect()
    }

    fn resolve(&self, seq: InsertionSeq) -> Option<&'a Item> {
        let item = self.store.resolve(seq);
        debug_assert!(item.is_some(), "trie handle {} has no live item", seq);
        if item.is_none() {
            warn!(seq = %seq, "trie handle has no live item");
        }
        item
    }
}
