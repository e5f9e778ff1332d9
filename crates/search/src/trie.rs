//! Prefix trie over content words
//!
//! Every node on a word's path accumulates the handle of each item whose
//! content contains that word, so looking up any prefix of the word (not
//! just the full word) is a single walk with no subtree enumeration.
//!
//! # Invariants
//!
//! - For every live item, every word of its tokenized content and every
//!   prefix length of that word, the node reached by the prefix holds the
//!   item's handle.
//! - A child's handle set is a subset of its parent's. A node whose set
//!   becomes empty therefore has an empty subtree and is pruned.
//! - The root holds no handles: the empty prefix matches nothing.
//!
//! Handles are [`InsertionSeq`] values, never items. The item store is the
//! only owner of item data.

use rustc_hash::{FxHashMap, FxHashSet};
use typeahead_core::InsertionSeq;

// ============================================================================
// TrieNode
// ============================================================================

/// One character position in a word path
#[derive(Debug, Default)]
pub struct TrieNode {
    /// Character on the edge leading here (`'\0'` for the root)
    ch: char,
    /// Next character -> child
    children: FxHashMap<char, TrieNode>,
    /// Items having a word that passes through this node
    items: FxHashSet<InsertionSeq>,
}

impl TrieNode {
    fn new(ch: char) -> Self {
        TrieNode {
            ch,
            children: FxHashMap::default(),
            items: FxHashSet::default(),
        }
    }

    /// The character this node represents
    pub fn ch(&self) -> char {
        self.ch
    }

    /// Handles of items whose content has a word with this node's prefix
    pub fn items(&self) -> &FxHashSet<InsertionSeq> {
        &self.items
    }

    /// Child reached by `c`, if any
    pub fn child(&self, c: char) -> Option<&TrieNode> {
        self.children.get(&c)
    }

    /// Number of nodes in this subtree, self included
    ///
    /// Iterative, so a long word does not deepen the call stack.
    fn subtree_size(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children.values());
        }
        count
    }
}

impl Drop for TrieNode {
    fn drop(&mut self) {
        // Flatten the subtree so dropping a deep path does not recurse
        let mut pending: Vec<TrieNode> = self.children.drain().map(|(_, n)| n).collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.children.drain().map(|(_, n)| n));
        }
    }
}

// ============================================================================
// TrieIndex
// ============================================================================

/// Trie index: word prefix -> set of item handles
#[derive(Debug)]
pub struct TrieIndex {
    root: TrieNode,
    /// Non-root nodes currently allocated
    node_count: usize,
}

impl Default for TrieIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl TrieIndex {
    /// Create an empty index
    pub fn new() -> Self {
        TrieIndex {
            root: TrieNode::new('\0'),
            node_count: 0,
        }
    }

    /// Index `handle` under every prefix of every token
    ///
    /// Tokens must already be lowercased and whitespace-split (see
    /// [`crate::tokenizer`]).
    pub fn insert<S: AsRef<str>>(&mut self, tokens: &[S], handle: InsertionSeq) {
        for token in tokens {
            let mut node = &mut self.root;
            for c in token.as_ref().chars() {
                let created = &mut self.node_count;
                node = node.children.entry(c).or_insert_with(|| {
                    *created += 1;
                    TrieNode::new(c)
                });
                node.items.insert(handle);
            }
        }
    }

    /// Remove `handle` from every prefix of every token
    ///
    /// Missing paths are a no-op. Callers must pass the same tokenization
    /// that was used at insert time.
    pub fn remove<S: AsRef<str>>(&mut self, tokens: &[S], handle: InsertionSeq) {
        for token in tokens {
            let pruned = Self::remove_path(&mut self.root, token.as_ref(), handle);
            self.node_count -= pruned;
        }
    }

    /// Discard `handle` along the path spelled by `word` below `node`.
    ///
    /// A child's set is a subset of its parent's, so the first node left
    /// empty is the top of an empty subtree: it is detached there and the
    /// walk stops. Returns the number of nodes pruned.
    fn remove_path(node: &mut TrieNode, word: &str, handle: InsertionSeq) -> usize {
        let mut node = node;
        for c in word.chars() {
            let emptied = match node.children.get_mut(&c) {
                Some(child) => {
                    child.items.remove(&handle);
                    child.items.is_empty()
                }
                None => return 0,
            };
            if emptied {
                return node
                    .children
                    .remove(&c)
                    .map_or(0, |child| child.subtree_size());
            }
            let Some(child) = node.children.get_mut(&c) else {
                return 0;
            };
            node = child;
        }
        0
    }

    /// Items having some word that starts with `word`
    ///
    /// Returns `None` when the path does not exist, which callers treat as
    /// the empty set. The empty word never matches.
    pub fn prefix_lookup(&self, word: &str) -> Option<&FxHashSet<InsertionSeq>> {
        if word.is_empty() {
            return None;
        }
        let mut node = &self.root;
        for c in word.chars() {
            node = node.children.get(&c)?;
        }
        Some(&node.items)
    }

    /// Whether any indexed word starts with `word`
    pub fn has_prefix(&self, word: &str) -> bool {
        self.prefix_lookup(word).is_some_and(|set| !set.is_empty())
    }

    /// Number of allocated nodes, root excluded
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Check if nothing is indexed
    pub fn is_empty(&self) -> bool {
        self.root.children.is_empty()
    }

    /// The root node
    pub fn root(&self) -> &TrieNode {
        &self.root
    }
}
