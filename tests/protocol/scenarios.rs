//! Scripted scenarios with exact expected output

use crate::common::*;
use typeahead::Executor;

#[test]
fn readme_example() {
    let (out, err, summary) = run_script(
        "ADD user u1 10 hello world\n\
         ADD user u2 10 hello there\n\
         ADD topic t1 5 hello\n\
         QUERY 3 hello\n",
    );
    assert_eq!(out, "u2 u1 t1\n");
    assert!(err.is_empty());
    assert!(summary.is_clean());
}

#[test]
fn prefix_matching() {
    let executor = Executor::ephemeral();
    apply(&executor, &["ADD question q1 1 the phone rang"]);
    for q in ["QUERY 5 pho", "QUERY 5 phon", "QUERY 5 phone", "QUERY 5 PHONE"] {
        assert_eq!(query(&executor, q), vec!["q1"], "{}", q);
    }
    assert!(query(&executor, "QUERY 5 phonex").is_empty());
    assert!(query(&executor, "QUERY 5 hone").is_empty());
}

#[test]
fn every_token_must_match() {
    let executor = Executor::ephemeral();
    apply(
        &executor,
        &[
            "ADD user u1 3 hello world",
            "ADD user u2 2 hello there",
            "ADD user u3 1 world peace",
        ],
    );
    assert_eq!(query(&executor, "QUERY 10 hel wor"), vec!["u1"]);
    assert_eq!(query(&executor, "QUERY 10 wor"), vec!["u1", "u3"]);
    assert!(query(&executor, "QUERY 10 hello peace").is_empty());
}

#[test]
fn delete_then_query() {
    let (out, _, summary) = run_script(
        "4\n\
         ADD user u1 10 hello world\n\
         ADD user u2 10 hello there\n\
         DEL u2\n\
         QUERY 5 hello\n",
    );
    assert_eq!(out, "u1\n");
    assert_eq!(summary.writes, 3);
}

#[test]
fn delete_unknown_is_silent() {
    let (out, err, summary) = run_script("DEL ghost\nQUERY 1 x\n");
    assert_eq!(out, "\n");
    assert!(err.is_empty());
    assert!(summary.is_clean());
}

#[test]
fn readd_after_delete() {
    let executor = Executor::ephemeral();
    apply(
        &executor,
        &[
            "ADD board b1 1 old words",
            "DEL b1",
            "ADD board b1 1 new words",
        ],
    );
    assert!(query(&executor, "QUERY 5 old").is_empty());
    assert_eq!(query(&executor, "QUERY 5 new"), vec!["b1"]);
    executor.engine().verify_index().unwrap();
}

#[test]
fn overwrite_changes_score_and_text() {
    let executor = Executor::ephemeral();
    apply(
        &executor,
        &[
            "ADD user a 5 apple",
            "ADD user b 4 apple",
            "ADD user a 1 apricot",
        ],
    );
    assert_eq!(query(&executor, "QUERY 5 ap"), vec!["b", "a"]);
    assert_eq!(query(&executor, "QUERY 5 apple"), vec!["b"]);
    assert_eq!(executor.engine().len(), 2);
}

#[test]
fn malformed_lines_do_not_stop_the_stream() {
    let (out, err, summary) = run_script(
        "ADD user u1 1 hi\n\
         ADD robot r1 1 hi\n\
         QUERY five hi\n\
         WQUERY 1 1 topic hi\n\
         QUERY 2 hi\n",
    );
    assert_eq!(out, "u1\n");
    assert_eq!(summary.errors, 3);
    assert_eq!(err.lines().count(), 3);
    assert!(err.contains("line 2:"));
    assert!(err.contains("unknown item type 'robot'"));
}

#[test]
fn scores_may_be_negative_or_fractional() {
    let executor = Executor::ephemeral();
    apply(
        &executor,
        &[
            "ADD topic t1 -1.5 cold",
            "ADD topic t2 0.25 cold",
            "ADD topic t3 0 cold",
        ],
    );
    assert_eq!(query(&executor, "QUERY 3 cold"), vec!["t2", "t3", "t1"]);
}
