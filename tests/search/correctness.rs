//! Core search correctness: outcomes, limits, and owning headers.

use crate::common::{fixture_sections, verify_hit_invariants};
use sveldoc::{search, search_default, SearchOutcome, DEFAULT_LIMIT};

#[test]
fn empty_query_is_invalid_not_empty() {
    let sections = fixture_sections();
    assert_eq!(search(&sections, "", DEFAULT_LIMIT), SearchOutcome::InvalidQuery);
    assert_eq!(
        search(&sections, " \t\n ", DEFAULT_LIMIT),
        SearchOutcome::InvalidQuery
    );
}

#[test]
fn unmatched_query_is_no_matches_not_invalid() {
    let sections = fixture_sections();
    assert_eq!(
        search(&sections, "zzzznotfound", DEFAULT_LIMIT),
        SearchOutcome::NoMatches
    );
}

#[test]
fn hits_carry_their_owning_section_header() {
    let sections = fixture_sections();
    let SearchOutcome::Hits(hits) = search(&sections, "router", DEFAULT_LIMIT) else {
        panic!("expected hits");
    };
    assert_eq!(hits[0].header, "# Routing");
    assert_eq!(hits[0].text, "Use a router for multi-page apps.");
    verify_hit_invariants(&hits, "router", DEFAULT_LIMIT, &sections);
}

#[test]
fn default_limit_caps_results_at_three() {
    let sections = fixture_sections();
    // "state" appears in many lines across Runes and Stores.
    let outcome = search_default(&sections, "state");
    assert!(outcome.len() <= 3);
    assert!(!outcome.is_empty());
}

#[test]
fn explicit_limit_is_respected() {
    let sections = fixture_sections();
    for limit in 1..=5 {
        let outcome = search(&sections, "svelte", limit);
        assert!(outcome.len() <= limit, "limit {} exceeded", limit);
        if let SearchOutcome::Hits(hits) = outcome {
            verify_hit_invariants(&hits, "svelte", limit, &sections);
        }
    }
}

#[test]
fn invariants_hold_across_query_shapes() {
    let sections = fixture_sections();
    let queries = [
        "svelte",
        "reactive state",
        "compiler instructions for reactivity",
        "STORE",
        "$state",
        "router svelte state",
    ];
    for query in queries {
        if let SearchOutcome::Hits(hits) = search(&sections, query, DEFAULT_LIMIT) {
            verify_hit_invariants(&hits, query, DEFAULT_LIMIT, &sections);
        }
    }
}

#[test]
fn rendered_form_matches_contract() {
    let sections = fixture_sections();
    let SearchOutcome::Hits(hits) = search(&sections, "router", 1) else {
        panic!("expected hits");
    };
    assert_eq!(hits[0].render(), "[# Routing] Use a router for multi-page apps.");
}
