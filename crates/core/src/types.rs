//! Item model
//!
//! An [`Item`] is the unit of indexing: a short record with a type, a score,
//! free-text content and the [`InsertionSeq`] it was created with.
//!
//! # Invariants
//!
//! - `id` is unique among live items (enforced by the item store)
//! - `insertion_seq` values are never reused, including across overwrites
//!   of the same id

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

// ============================================================================
// ItemType
// ============================================================================

/// The fixed enumeration of item kinds
///
/// Type names double as boost keys in weighted queries: a boost key that
/// parses as an `ItemType` targets every item of that type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    /// A user profile
    User,
    /// A topic
    Topic,
    /// A question
    Question,
    /// A board
    Board,
}

impl ItemType {
    /// All item types, in declaration order
    pub const ALL: [ItemType; 4] = [
        ItemType::User,
        ItemType::Topic,
        ItemType::Question,
        ItemType::Board,
    ];

    /// Canonical lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::User => "user",
            ItemType::Topic => "topic",
            ItemType::Question => "question",
            ItemType::Board => "board",
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemType {
    type Err = Error;

    /// Type names are matched exactly (lowercase), like the command protocol.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(ItemType::User),
            "topic" => Ok(ItemType::Topic),
            "question" => Ok(ItemType::Question),
            "board" => Ok(ItemType::Board),
            other => Err(Error::InvalidItemType(other.to_string())),
        }
    }
}

// ============================================================================
// InsertionSeq
// ============================================================================

/// Creation-order sequence number
///
/// Assigned by the engine on every ADD from a monotonically increasing
/// counter. Because values are never reused it also serves as the
/// non-owning handle the trie index stores in place of the item itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InsertionSeq(pub u64);

impl InsertionSeq {
    /// Raw sequence value
    pub fn as_u64(&self) -> u64 {
        self.0
    }

    /// The sequence number following this one
    pub fn next(&self) -> InsertionSeq {
        InsertionSeq(self.0 + 1)
    }
}

impl fmt::Display for InsertionSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// ============================================================================
// Item
// ============================================================================

/// An indexed record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier among live items
    pub id: String,
    /// Item kind
    pub item_type: ItemType,
    /// Ranking score; only changed by overwriting the item, never by a query
    pub score: f64,
    /// Raw content; lowercased and whitespace-split for indexing
    pub content: String,
    /// Creation order
    pub insertion_seq: InsertionSeq,
}

impl Item {
    /// Create a new item
    pub fn new(
        item_type: ItemType,
        id: impl Into<String>,
        score: f64,
        content: impl Into<String>,
        insertion_seq: InsertionSeq,
    ) -> Self {
        Item {
            id: id.into(),
            item_type,
            score,
            content: content.into(),
            insertion_seq,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_type_parse_all() {
        for t in ItemType::ALL {
            assert_eq!(t.as_str().parse::<ItemType>().unwrap(), t);
        }
    }

    #[test]
    fn test_item_type_parse_is_case_sensitive() {
        let err = "User".parse::<ItemType>().unwrap_err();
        assert_eq!(err, Error::InvalidItemType("User".to_string()));
    }

    #[test]
    fn test_item_type_rejects_ids() {
        assert!("u1".parse::<ItemType>().is_err());
        assert!("".parse::<ItemType>().is_err());
    }

    #[test]
    fn test_item_type_serde_lowercase() {
        let json = serde_json::to_string(&ItemType::Question).unwrap();
        assert_eq!(json, "\"question\"");
        let back: ItemType = serde_json::from_str("\"board\"").unwrap();
        assert_eq!(back, ItemType::Board);
    }

    #[test]
    fn test_insertion_seq_ordering() {
        let a = InsertionSeq(3);
        assert!(a.next() > a);
        assert_eq!(a.next().as_u64(), 4);
        assert_eq!(a.to_string(), "#3");
    }

    #[test]
    fn test_item_new() {
        let item = Item::new(ItemType::User, "u1", 10.0, "Hello World", InsertionSeq(0));
        assert_eq!(item.id, "u1");
        assert_eq!(item.item_type, ItemType::User);
        assert_eq!(item.content, "Hello World");
        assert_eq!(item.insertion_seq, InsertionSeq(0));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn parse_accepts_only_type_names(s in "[a-zA-Z0-9]{0,10}") {
                match s.parse::<ItemType>() {
                    Ok(t) => prop_assert_eq!(t.as_str(), s.as_str()),
                    Err(e) => prop_assert_eq!(e, Error::InvalidItemType(s.clone())),
                }
            }

            #[test]
            fn seq_order_follows_u64(a in any::<u64>(), b in any::<u64>()) {
                prop_assert_eq!(InsertionSeq(a).cmp(&InsertionSeq(b)), a.cmp(&b));
            }
        }
    }
}
