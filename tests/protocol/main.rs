//! Protocol Tests
//!
//! End-to-end tests of the ADD/DEL/QUERY/WQUERY line protocol through the
//! public `typeahead` API:
//! - scripted scenarios with exact expected output
//! - boost behavior under both id boost policies
//! - randomized invariants (proptest)

mod common;

mod boosts;
mod properties;
mod scenarios;
