// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Two-pass relevance search over segmented documentation.
//!
//! Result assembly is a union of two passes over every content line:
//!
//! 1. **Exact pass** — score each line as
//!    `max(header score, line score)` under the substring / word-overlap
//!    rule, keep positive scores, sort descending.
//! 2. **Per-token pass** — for each query token independently, rank lines by
//!    raw occurrence count (×100 when the owning header also contains the
//!    token), keep the top [`PER_TOKEN_KEEP`] per token.
//!
//! The concatenation (exact first, then tokens in query order) is
//! deduplicated by exact line text — first occurrence wins, so a line that
//! qualifies both ways sits at its exact-match rank — and truncated to the
//! caller's limit.
//!
//! All sorts are stable, so equal scores keep source order and the whole
//! pipeline is deterministic.
//!
//! The per-token pass re-scans every line once per query token. That is
//! O(tokens × lines) — fine at documentation scale, but grow the corpus a
//! couple of orders of magnitude and this wants an inverted index instead.

use crate::scoring::{
    match_score, occurrence_count, tokenize, HEADER_OCCURRENCE_WEIGHT, LINE_OCCURRENCE_WEIGHT,
};
use crate::types::{SearchHit, SearchOutcome, Section};
use std::collections::HashSet;

/// Default number of results returned when the caller does not specify one.
pub const DEFAULT_LIMIT: usize = 3;

/// How many lines each query token may contribute from the per-token pass.
pub const PER_TOKEN_KEEP: usize = 3;

/// Search segmented documentation for the top `limit` most relevant lines.
///
/// Pure function of `(sections, query, limit)` — the section list is read
/// only, so arbitrarily many searches may run against the same document.
pub fn search(sections: &[Section], query: &str, limit: usize) -> SearchOutcome {
    let tokens = tokenize(query);
    if tokens.is_empty() {
        return SearchOutcome::InvalidQuery;
    }

    let mut results: Vec<SearchHit> = Vec::new();

    // Pass 1: exact scoring, best-first.
    let mut exact: Vec<(u64, SearchHit)> = Vec::new();
    for section in sections {
        let header_score = match_score(&section.header, query, &tokens, true);
        for line in &section.content {
            let line_score = match_score(line, query, &tokens, false);
            let effective = header_score.max(line_score);
            if effective > 0 {
                exact.push((
                    effective,
                    SearchHit {
                        header: section.header.clone(),
                        text: line.clone(),
                    },
                ));
            }
        }
    }
    exact.sort_by(|a, b| b.0.cmp(&a.0)); // stable: ties keep source order
    results.extend(exact.into_iter().map(|(_, hit)| hit));

    // Pass 2: per-token occurrence ranking, tokens in query order.
    for token in &tokens {
        let mut by_token: Vec<(usize, SearchHit)> = Vec::new();
        for section in sections {
            let header_has_token = section.header.to_lowercase().contains(token.as_str());
            let weight = if header_has_token {
                HEADER_OCCURRENCE_WEIGHT
            } else {
                LINE_OCCURRENCE_WEIGHT
            };
            for line in &section.content {
                let occurrences = occurrence_count(line, token);
                if occurrences > 0 {
                    by_token.push((
                        occurrences * weight,
                        SearchHit {
                            header: section.header.clone(),
                            text: line.clone(),
                        },
                    ));
                }
            }
        }
        by_token.sort_by(|a, b| b.0.cmp(&a.0));
        results.extend(
            by_token
                .into_iter()
                .take(PER_TOKEN_KEEP)
                .map(|(_, hit)| hit),
        );
    }

    // Dedup by exact line text, first occurrence wins, then truncate.
    let mut seen: HashSet<String> = HashSet::new();
    let mut hits: Vec<SearchHit> = Vec::new();
    for hit in results {
        if hits.len() == limit {
            break;
        }
        if seen.insert(hit.text.clone()) {
            hits.push(hit);
        }
    }

    if hits.is_empty() {
        SearchOutcome::NoMatches
    } else {
        SearchOutcome::Hits(hits)
    }
}

/// [`search`] with [`DEFAULT_LIMIT`].
pub fn search_default(sections: &[Section], query: &str) -> SearchOutcome {
    search(sections, query, DEFAULT_LIMIT)
}
