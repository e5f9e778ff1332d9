//! Per-query score boosts
//!
//! A boost is a `key:factor` pair. The key is an item type name when it
//! parses as one, otherwise an item id. Keys may repeat; every occurrence
//! contributes its own factor and factors compose multiplicatively in the
//! order given.
//!
//! Boosts are applied to [`ScoredItem`] copies only. The item store is
//! never touched.

use serde::{Deserialize, Serialize};
use typeahead_core::{Item, ItemType};

use crate::topk::ScoredItem;

// ============================================================================
// IdBoostPolicy
// ============================================================================

/// What an id-keyed boost does when that id did not match the query
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdBoostPolicy {
    /// Only rescore the item if it is already a candidate
    #[default]
    MatchOnly,
    /// Inject the boosted item into the ranked set even when it did not
    /// match the query tokens ("pin this id into the results")
    Pin,
}

// ============================================================================
// Boost
// ============================================================================

/// What a boost applies to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BoostTarget {
    /// Every item of this type
    Type(ItemType),
    /// The item with this id
    Id(String),
}

impl BoostTarget {
    /// Classify a raw boost key
    pub fn from_key(key: &str) -> Self {
        match key.parse::<ItemType>() {
            Ok(t) => BoostTarget::Type(t),
            Err(_) => BoostTarget::Id(key.to_string()),
        }
    }

    /// Whether this target selects `item`
    pub fn matches(&self, item_type: ItemType, id: &str) -> bool {
        match self {
            BoostTarget::Type(t) => *t == item_type,
            BoostTarget::Id(target) => target == id,
        }
    }
}

/// A single multiplicative boost
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Boost {
    /// Type or id selected by this boost
    pub target: BoostTarget,
    /// Score multiplier
    pub factor: f64,
}

impl Boost {
    /// Create a boost from a raw key and factor
    pub fn new(key: &str, factor: f64) -> Self {
        Boost {
            target: BoostTarget::from_key(key),
            factor,
        }
    }
}

// ============================================================================
// Boosts
// ============================================================================

/// Ordered list of boosts for one query
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Boosts {
    entries: Vec<Boost>,
}

impl Boosts {
    /// No boosts
    pub fn none() -> Self {
        Boosts::default()
    }

    /// Build from boosts in input order
    pub fn new(entries: Vec<Boost>) -> Self {
        Boosts { entries }
    }

    /// Append a boost
    pub fn push(&mut self, boost: Boost) {
        self.entries.push(boost);
    }

    /// Check if there are no boosts
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of boost terms
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Boost terms in input order
    pub fn entries(&self) -> &[Boost] {
        &self.entries
    }

    /// Copy `item` and apply every matching factor in order
    pub fn apply(&self, item: &Item) -> ScoredItem {
        let mut scored = ScoredItem::from_item(item);
        for boost in &self.entries {
            if boost.target.matches(item.item_type, &item.id) {
                scored.score *= boost.factor;
            }
        }
        scored
    }

    /// Distinct ids targeted by id boosts, first occurrence order
    pub fn target_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = Vec::new();
        for boost in &self.entries {
            if let BoostTarget::Id(id) = &boost.target {
                if !ids.contains(&id.as_str()) {
                    ids.push(id);
                }
            }
        }
        ids
    }
}

impl FromIterator<Boost> for Boosts {
    fn from_iter<I: IntoIterator<Item = Boost>>(iter: I) -> Self {
        Boosts::new(iter.into_iter().collect())
    }
}
