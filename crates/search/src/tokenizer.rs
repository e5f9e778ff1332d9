//! Whitespace tokenizer
//!
//! Indexing and querying must agree on tokenization, otherwise removal would
//! miss trie paths created at insert time. Both go through this module.

/// Tokenize text into lowercase whitespace-separated terms
///
/// No punctuation stripping and no length filter: "hello," and "hello" are
/// different words.
///
/// # Example
///
/// ```
/// use typeahead_search::tokenizer::tokenize;
///
/// let tokens = tokenize("  Hello   World ");
/// assert_eq!(tokens, vec!["hello", "world"]);
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(String::from)
        .collect()
}

/// Tokenize and deduplicate, preserving first occurrence order
///
/// Used for indexing: a word appearing twice in the content is indexed once.
///
/// # Example
///
/// ```
/// use typeahead_search::tokenizer::tokenize_unique;
///
/// let tokens = tokenize_unique("phone Phone PHONE call");
/// assert_eq!(tokens, vec!["phone", "call"]);
/// ```
pub fn tokenize_unique(text: &str) -> Vec<String> {
    let mut seen = rustc_hash::FxHashSet::default();
    tokenize(text)
        .into_iter()
        .filter(|t| seen.insert(t.clone()))
        .collect()
}
