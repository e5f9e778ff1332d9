//! Randomized invariants checked against a brute-force model

use std::collections::HashMap;

use proptest::prelude::*;
use typeahead::{Engine, IdBoostPolicy, ItemType, TypeaheadConfig};
use typeahead_search::{select_top_k, ScoredItem};

const WORDS: &[&str] = &[
    "phone", "photo", "phantom", "hello", "help", "helium", "world", "word", "ward", "zebra",
];

#[derive(Debug, Clone)]
enum Op {
    Add {
        item_type: ItemType,
        id: usize,
        score: i32,
        words: Vec<usize>,
    },
    Del {
        id: usize,
    },
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (
            prop::sample::select(ItemType::ALL.to_vec()),
            0usize..12,
            -5i32..20,
            prop::collection::vec(0..WORDS.len(), 0..4),
        )
            .prop_map(|(item_type, id, score, words)| Op::Add {
                item_type,
                id,
                score,
                words,
            }),
        1 => (0usize..12).prop_map(|id| Op::Del { id }),
    ]
}

struct ModelItem {
    score: f64,
    content: String,
    seq: u64,
}

/// Applies ops to both the engine and a plain map of live items.
fn apply_ops(engine: &Engine, ops: &[Op]) -> HashMap<String, ModelItem> {
    let mut model = HashMap::new();
    for op in ops {
        match op {
            Op::Add {
                item_type,
                id,
                score,
                words,
            } => {
                let id = format!("i{}", id);
                let content = words
                    .iter()
                    .map(|&w| WORDS[w])
                    .collect::<Vec<_>>()
                    .join(" ");
                let seq = engine.add(*item_type, id.clone(), *score as f64, content.clone());
                model.insert(
                    id,
                    ModelItem {
                        score: *score as f64,
                        content,
                        seq: seq.as_u64(),
                    },
                );
            }
            Op::Del { id } => {
                let id = format!("i{}", id);
                let existed = engine.delete(&id).is_ok();
                assert_eq!(existed, model.remove(&id).is_some());
            }
        }
    }
    model
}

fn model_query(model: &HashMap<String, ModelItem>, k: usize, query: &str) -> Vec<String> {
    let tokens: Vec<String> = query.split_whitespace().map(str::to_lowercase).collect();
    if tokens.is_empty() {
        return Vec::new();
    }
    let mut hits: Vec<(&String, &ModelItem)> = model
        .iter()
        .filter(|(_, item)| {
            tokens.iter().all(|t| {
                item.content
                    .split_whitespace()
                    .any(|w| w.starts_with(t.as_str()))
            })
        })
        .collect();
    hits.sort_by(|a, b| {
        b.1.score
            .total_cmp(&a.1.score)
            .then(b.1.seq.cmp(&a.1.seq))
    });
    hits.into_iter().take(k).map(|(id, _)| id.clone()).collect()
}

fn ids(results: Vec<ScoredItem>) -> Vec<String> {
    results.into_iter().map(|s| s.id).collect()
}

fn query_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        (0..WORDS.len(), 1usize..6).prop_map(|(w, len)| {
            let word = WORDS[w];
            word[..len.min(word.len())].to_uppercase()
        }),
        0..3,
    )
    .prop_map(|tokens| tokens.join(" "))
}

proptest! {
    #[test]
    fn prop_queries_match_model(
        ops in prop::collection::vec(op_strategy(), 0..40),
        queries in prop::collection::vec((0usize..8, query_strategy()), 1..6),
    ) {
        let engine = Engine::new();
        let model = apply_ops(&engine, &ops);
        for (k, q) in &queries {
            let got = ids(engine.query(*k, q));
            prop_assert!(got.len() <= *k);
            prop_assert_eq!(got, model_query(&model, *k, q), "query {:?} k={}", q, k);
        }
    }

    #[test]
    fn prop_index_consistent_after_churn(ops in prop::collection::vec(op_strategy(), 0..60)) {
        let engine = Engine::new();
        let model = apply_ops(&engine, &ops);
        prop_assert!(engine.verify_index().is_ok());
        prop_assert_eq!(engine.len(), model.len());
        if model.values().all(|item| item.content.is_empty()) {
            prop_assert_eq!(engine.stats().trie_nodes, 0);
        }
    }

    #[test]
    fn prop_full_sort_matches_heap(
        ops in prop::collection::vec(op_strategy(), 0..40),
        k in 0usize..15,
        q in query_strategy(),
    ) {
        let heap = Engine::new();
        let sorted = Engine::with_config(TypeaheadConfig {
            id_boost_policy: IdBoostPolicy::MatchOnly,
            full_sort_threshold: 1,
        });
        apply_ops(&heap, &ops);
        apply_ops(&sorted, &ops);
        prop_assert_eq!(ids(heap.query(k, &q)), ids(sorted.query(k, &q)));
    }

    #[test]
    fn prop_select_top_k_is_sorted_prefix(
        scores in prop::collection::vec(-50i32..50, 0..60),
        k in 0usize..70,
    ) {
        let candidates: Vec<ScoredItem> = scores
            .iter()
            .enumerate()
            .map(|(i, &s)| ScoredItem {
                id: format!("c{}", i),
                item_type: ItemType::Topic,
                score: s as f64,
                insertion_seq: typeahead::InsertionSeq(i as u64),
            })
            .collect();
        let mut expected = candidates.clone();
        expected.sort_by(|a, b| b.cmp(a));
        expected.truncate(k);

        let heap = select_top_k(candidates.clone(), k, usize::MAX);
        let full = select_top_k(candidates, k, 0);
        prop_assert_eq!(&heap, &expected);
        prop_assert_eq!(&full, &expected);
    }
}
