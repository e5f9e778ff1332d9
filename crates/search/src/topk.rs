//! Top-K selection under the ranking order
//!
//! # Ranking order
//!
//! One rule, used by both the bounded heap and the full-sort path:
//!
//! 1. `score` descending (compared with `f64::total_cmp`)
//! 2. `insertion_seq` descending: on equal score the more recently
//!    inserted item ranks first
//!
//! `ScoredItem`'s `Ord` encodes this with "greater ranks higher", so the
//! best item is the maximum. Since live insertion sequences are unique the
//! order is total over any candidate set and output is deterministic.

use serde::{Deserialize, Serialize};
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use typeahead_core::{InsertionSeq, Item, ItemType};

// ============================================================================
// ScoredItem
// ============================================================================

/// A ranked candidate
///
/// Always a value copy: boosts are applied to `score` here and never reach
/// the stored item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredItem {
    /// Item id
    pub id: String,
    /// Item type
    pub item_type: ItemType,
    /// Score after boosts
    pub score: f64,
    /// Creation order of the stored item
    pub insertion_seq: InsertionSeq,
}

impl ScoredItem {
    /// Copy the ranking fields of a stored item
    pub fn from_item(item: &Item) -> Self {
        ScoredItem {
            id: item.id.clone(),
            item_type: item.item_type,
            score: item.score,
            insertion_seq: item.insertion_seq,
        }
    }
}

impl PartialEq for ScoredItem {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ScoredItem {}

impl PartialOrd for ScoredItem {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ScoredItem {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap<ScoredItem> pops the best item
        // BinaryHeap<Reverse<ScoredItem>> pops the worst (eviction order)
        self.score
            .total_cmp(&other.score)
            .then_with(|| self.insertion_seq.cmp(&other.insertion_seq))
    }
}

// ============================================================================
// TopK
// ============================================================================

/// Bounded selector holding the `k` best items pushed so far
///
/// Memory is O(k) regardless of how many items are pushed.
#[derive(Debug)]
pub struct TopK {
    k: usize,
    // min-heap via Reverse: worst held item on top for eviction
    heap: BinaryHeap<Reverse<ScoredItem>>,
}

impl TopK {
    /// Create a selector with capacity `k`
    pub fn new(k: usize) -> Self {
        TopK {
            k,
            // k may be huge when the caller wants "everything"
            heap: BinaryHeap::with_capacity(k.min(1024)),
        }
    }

    /// Offer an item
    ///
    /// Kept if fewer than `k` items are held or if it outranks the current
    /// worst, which it then replaces.
    pub fn push(&mut self, item: ScoredItem) {
        if self.k == 0 {
            return;
        }
        if self.heap.len() < self.k {
            self.heap.push(Reverse(item));
            return;
        }
        if let Some(mut worst) = self.heap.peek_mut() {
            if item > worst.0 {
                *worst = Reverse(item);
            }
        }
    }

    /// Number of items held
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Check if nothing is held
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Consume the selector, returning held items best first
    pub fn drain(self) -> Vec<ScoredItem> {
        // ascending in Reverse order == descending in rank
        self.heap
            .into_sorted_vec()
            .into_iter()
            .map(|Reverse(item)| item)
            .collect()
    }
}

impl Extend<ScoredItem> for TopK {
    fn extend<I: IntoIterator<Item = ScoredItem>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

/// Select the `k` best candidates, best first
///
/// When `k >= full_sort_threshold` all candidates are sorted and truncated
/// instead of going through the bounded heap. Both paths give identical
/// output.
pub fn select_top_k<I>(candidates: I, k: usize, full_sort_threshold: usize) -> Vec<ScoredItem>
where
    I: IntoIterator<Item = ScoredItem>,
{
    if k >= full_sort_threshold {
        let mut all: Vec<ScoredItem> = candidates.into_iter().collect();
        all.sort_unstable_by(|a, b| b.cmp(a));
        all.truncate(k);
        return all;
    }
    let mut top = TopK::new(k);
    top.extend(candidates);
    top.drain()
}
