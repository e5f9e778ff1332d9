//! WQUERY boost behavior

use crate::common::*;
use typeahead::{Executor, IdBoostPolicy, TypeaheadConfig};

fn populated(policy: IdBoostPolicy) -> Executor {
    let executor = Executor::with_config(TypeaheadConfig {
        id_boost_policy: policy,
        ..TypeaheadConfig::default()
    });
    apply(
        &executor,
        &[
            "ADD user u1 10 cheap phone",
            "ADD topic t1 5 phone reviews",
            "ADD board b1 8 phone deals",
            "ADD question q1 9 which laptop",
        ],
    );
    executor
}

#[test]
fn type_boost_reranks_without_mutating() {
    let executor = populated(IdBoostPolicy::MatchOnly);
    assert_eq!(
        query(&executor, "WQUERY 2 1 topic:9.99 phone"),
        vec!["t1", "u1"]
    );
    assert_eq!(query(&executor, "QUERY 3 phone"), vec!["u1", "b1", "t1"]);
    assert_eq!(executor.engine().get("t1").unwrap().score, 5.0);
}

#[test]
fn factors_compose_multiplicatively() {
    let executor = populated(IdBoostPolicy::MatchOnly);
    // t1: 5 * 1.5 * 1.5 = 11.25 beats u1: 10
    assert_eq!(
        query(&executor, "WQUERY 1 2 topic:1.5 topic:1.5 phone"),
        vec!["t1"]
    );
    // t1: 5 * 1.5 * 1.2 = 9.0 loses to u1: 10
    assert_eq!(
        query(&executor, "WQUERY 1 2 topic:1.5 t1:1.2 phone"),
        vec!["u1"]
    );
}

#[test]
fn zero_boosts_is_a_plain_query() {
    let executor = populated(IdBoostPolicy::MatchOnly);
    assert_eq!(
        query(&executor, "WQUERY 3 0 phone"),
        query(&executor, "QUERY 3 phone")
    );
}

#[test]
fn id_boost_only_rescoring_candidates_by_default() {
    let executor = populated(IdBoostPolicy::MatchOnly);
    assert_eq!(
        query(&executor, "WQUERY 5 1 q1:100 phone"),
        vec!["u1", "b1", "t1"]
    );
    assert_eq!(
        query(&executor, "WQUERY 5 1 b1:2 phone"),
        vec!["b1", "u1", "t1"]
    );
}

#[test]
fn id_boost_pins_under_pin_policy() {
    let executor = populated(IdBoostPolicy::Pin);
    assert_eq!(
        query(&executor, "WQUERY 2 1 q1:100 phone"),
        vec!["q1", "u1"]
    );
    // pinned item still competes on its boosted score
    assert_eq!(
        query(&executor, "WQUERY 5 1 q1:0.1 phone"),
        vec!["u1", "b1", "t1", "q1"]
    );
    // pinned item picks up type boosts for its type
    assert_eq!(
        query(&executor, "WQUERY 1 2 q1:1 question:2 phone"),
        vec!["q1"]
    );
}

#[test]
fn pin_needs_a_matching_query() {
    let executor = populated(IdBoostPolicy::Pin);
    assert!(query(&executor, "WQUERY 5 1 q1:100 tablet").is_empty());
}

#[test]
fn pin_ignores_deleted_ids() {
    let executor = populated(IdBoostPolicy::Pin);
    apply(&executor, &["DEL q1"]);
    assert_eq!(
        query(&executor, "WQUERY 5 1 q1:100 phone"),
        vec!["u1", "b1", "t1"]
    );
}
