// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind search ranking.
//!
//! Header context dominates line context at every rung: a phrase found in a
//! section header outranks the same phrase found in a content line, and a
//! token overlap counted against a header outweighs the same overlap counted
//! against a line. All comparison is case-insensitive, purely lexical — no
//! stemming, no embeddings.
//!
//! # Constants (preserved verbatim for ranking compatibility)
//!
//! | Constant                  | Value | Applies to                          |
//! |---------------------------|-------|-------------------------------------|
//! | `HEADER_PHRASE_SCORE`     | 10000 | full query found in a header        |
//! | `LINE_PHRASE_SCORE`       | 1000  | full query found in a content line  |
//! | `HEADER_TOKEN_WEIGHT`     | 800   | per distinct token, header overlap  |
//! | `LINE_TOKEN_WEIGHT`       | 400   | per distinct token, line overlap    |
//! | `HEADER_OCCURRENCE_WEIGHT`| 100   | per-token pass, header contains it  |
//! | `LINE_OCCURRENCE_WEIGHT`  | 1     | per-token pass, header lacks it     |
//!
//! Token overlap only scores when at least [`MIN_TOKEN_OVERLAP`] distinct
//! tokens match — a single stray word from a multi-word query is noise, not
//! relevance.

/// Score for the full query appearing verbatim in a section header.
pub const HEADER_PHRASE_SCORE: u64 = 10_000;

/// Score for the full query appearing verbatim in a content line.
pub const LINE_PHRASE_SCORE: u64 = 1_000;

/// Per-matching-token weight when overlap is counted against a header.
pub const HEADER_TOKEN_WEIGHT: u64 = 800;

/// Per-matching-token weight when overlap is counted against a content line.
pub const LINE_TOKEN_WEIGHT: u64 = 400;

/// Occurrence multiplier when the owning header also contains the token.
pub const HEADER_OCCURRENCE_WEIGHT: usize = 100;

/// Occurrence multiplier when the owning header does not contain the token.
pub const LINE_OCCURRENCE_WEIGHT: usize = 1;

/// Minimum number of distinct matching tokens before overlap scores at all.
pub const MIN_TOKEN_OVERLAP: usize = 2;

/// Score a text against a query with the substring / word-overlap rule.
///
/// `tokens` must be the whitespace tokenization of `query`; the caller
/// tokenizes once and reuses the list across every line. `is_header` selects
/// the header-weighted rung of each rule.
///
/// - single-token query: phrase containment or nothing;
/// - multi-token query: phrase containment first, otherwise distinct-token
///   overlap of at least [`MIN_TOKEN_OVERLAP`] tokens.
pub fn match_score(text: &str, query: &str, tokens: &[String], is_header: bool) -> u64 {
    if tokens.is_empty() {
        return 0;
    }

    let text_lower = text.to_lowercase();
    let query_lower = query.trim().to_lowercase();

    let phrase_score = if is_header {
        HEADER_PHRASE_SCORE
    } else {
        LINE_PHRASE_SCORE
    };

    if tokens.len() == 1 {
        return if text_lower.contains(&tokens[0]) {
            phrase_score
        } else {
            0
        };
    }

    if text_lower.contains(&query_lower) {
        return phrase_score;
    }

    // Distinct tokens only: "state state" is one token's worth of evidence.
    let matching = tokens
        .iter()
        .collect::<std::collections::BTreeSet<_>>()
        .into_iter()
        .filter(|token| text_lower.contains(token.as_str()))
        .count();
    if matching >= MIN_TOKEN_OVERLAP {
        let weight = if is_header {
            HEADER_TOKEN_WEIGHT
        } else {
            LINE_TOKEN_WEIGHT
        };
        matching as u64 * weight
    } else {
        0
    }
}

/// Count non-overlapping, case-insensitive occurrences of `token` in `text`.
///
/// Used by the per-token result pass as its ranking signal.
pub fn occurrence_count(text: &str, token: &str) -> usize {
    if token.is_empty() {
        return 0;
    }
    let text_lower = text.to_lowercase();
    let token_lower = token.to_lowercase();

    let mut count = 0;
    let mut from = 0;
    while let Some(pos) = text_lower[from..].find(&token_lower) {
        count += 1;
        from += pos + token_lower.len();
    }
    count
}

/// Tokenize a query: split on whitespace, lowercase, drop empty tokens.
///
/// An empty result means the query is invalid and scoring must not run.
pub fn tokenize(query: &str) -> Vec<String> {
    query
        .split_whitespace()
        .map(str::to_lowercase)
        .collect()
}
