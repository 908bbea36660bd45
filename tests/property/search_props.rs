//! Search properties: outcome discipline, limits, dedup, determinism.

use proptest::prelude::*;
use proptest::string::string_regex;
use std::collections::HashSet;
use sveldoc::{search, segment, SearchOutcome, Section};

fn document() -> impl Strategy<Value = String> {
    let content = string_regex("[a-z0-9 ]{1,30}").unwrap();
    let header = string_regex("# [a-z][a-z0-9 ]{0,15}").unwrap();
    prop::collection::vec(prop_oneof![3 => content, 1 => header], 1..25)
        .prop_map(|lines| lines.join("\n"))
}

fn query() -> impl Strategy<Value = String> {
    string_regex("[a-z ]{0,20}").unwrap()
}

fn sections_for(text: &str) -> Vec<Section> {
    segment(text).unwrap()
}

proptest! {
    #[test]
    fn whitespace_queries_are_always_invalid(
        text in document(),
        spaces in string_regex("[ \t]{0,10}").unwrap(),
    ) {
        let sections = sections_for(&text);
        if spaces.trim().is_empty() {
            prop_assert_eq!(search(&sections, &spaces, 3), SearchOutcome::InvalidQuery);
        }
    }

    #[test]
    fn result_length_never_exceeds_limit(
        text in document(),
        q in query(),
        limit in 0usize..8,
    ) {
        let sections = sections_for(&text);
        prop_assert!(search(&sections, &q, limit).len() <= limit);
    }

    #[test]
    fn hits_are_unique_by_line_text(text in document(), q in query()) {
        let sections = sections_for(&text);
        if let SearchOutcome::Hits(hits) = search(&sections, &q, 10) {
            let texts: HashSet<&str> = hits.iter().map(|h| h.text.as_str()).collect();
            prop_assert_eq!(texts.len(), hits.len());
        }
    }

    #[test]
    fn every_hit_is_a_real_line(text in document(), q in query()) {
        let sections = sections_for(&text);
        if let SearchOutcome::Hits(hits) = search(&sections, &q, 10) {
            for hit in hits {
                let owner = sections.iter().find(|s| s.header == hit.header);
                prop_assert!(owner.is_some());
                prop_assert!(owner.unwrap().content.iter().any(|l| l == &hit.text));
            }
        }
    }

    #[test]
    fn search_is_deterministic(text in document(), q in query()) {
        let sections = sections_for(&text);
        prop_assert_eq!(search(&sections, &q, 5), search(&sections, &q, 5));
    }

    #[test]
    fn a_line_containing_the_whole_query_is_found(
        text in document(),
        q in string_regex("[a-z]{2,8}").unwrap(),
    ) {
        // Plant the query into a fresh content line; a single-token query
        // must surface it (possibly among other hits).
        let planted = format!("{}\nplanted line with {} inside", text, q);
        let sections = sections_for(&planted);
        let outcome = search(&sections, &q, 50);
        prop_assert!(matches!(outcome, SearchOutcome::Hits(_)));
        if let SearchOutcome::Hits(hits) = outcome {
            prop_assert!(hits.iter().any(|h| h.text.contains(&q)));
        }
    }
}
