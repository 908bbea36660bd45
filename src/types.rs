// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of the documentation index.
//!
//! A fetched document becomes an ordered list of [`Section`]s, and a search
//! over those sections produces a [`SearchOutcome`]. Everything here is plain
//! data: the segmenter builds it once, the server reads it forever after.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **Section ids are unique** within a document. The segmenter enforces
//!   this with numeric collision suffixes, and `validate_sections` checks it.
//! - **Section order matches source order**. Resource listings and search
//!   tie-breaks both depend on it.
//! - **There is always at least one section**: the synthetic leading section
//!   opens every document, even one with no header lines at all.

use serde::{Deserialize, Serialize};

/// Fixed id of the synthetic leading section.
pub const SYNTHETIC_SECTION_ID: &str = "start-of-svelte-documentation";

/// Fixed header of the synthetic leading section.
///
/// A source line whose trimmed text equals this exact string is dropped
/// during segmentation, so a document that happens to contain the literal
/// header cannot open a second copy of the synthetic section.
pub const SYNTHETIC_SECTION_HEADER: &str = "# Start of Svelte documentation";

/// A single line of the raw source text, classified during segmentation.
///
/// Transient: produced by splitting the fetched text, consumed while building
/// sections, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLine {
    /// Trimmed line text (never empty — blank lines are discarded earlier).
    pub text: String,
    /// True iff the trimmed text starts with the `"# "` marker.
    pub is_header: bool,
}

impl RawLine {
    /// Classify a trimmed, non-empty source line.
    pub fn classify(text: &str) -> Self {
        RawLine {
            text: text.to_string(),
            is_header: text.starts_with("# "),
        }
    }
}

/// A contiguous span of the document from one header line to the next.
///
/// The `id` doubles as the section's address: search results carry the
/// `header`, resource reads resolve `svelte-docs:///section/<id>`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    /// Slug derived from the header text (e.g. `"runes-state"`), unique
    /// within the document.
    pub id: String,
    /// Original trimmed header line, marker included (e.g. `"# $state"`).
    pub header: String,
    /// Trimmed, non-empty content lines in source order. May be empty when
    /// two headers are adjacent in the source.
    pub content: Vec<String>,
}

impl Section {
    /// The synthetic leading section, before any content has been collected.
    pub fn synthetic() -> Self {
        Section {
            id: SYNTHETIC_SECTION_ID.to_string(),
            header: SYNTHETIC_SECTION_HEADER.to_string(),
            content: Vec::new(),
        }
    }

    /// Check if a section id is valid for use in a resource URI.
    ///
    /// Valid characters: lowercase alphanumeric and hyphen. Slugs produced by
    /// the segmenter always satisfy this.
    pub fn is_valid_id(&self) -> bool {
        !self.id.is_empty()
            && self
                .id
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    }
}

/// Validate that a section list satisfies the document invariants.
///
/// - list is non-empty;
/// - every section has a non-empty header and a valid, unique id.
///
/// The segmenter upholds these by construction; this is the defensive check
/// run before a list is published to the server.
pub fn validate_sections(sections: &[Section]) -> Result<(), String> {
    if sections.is_empty() {
        return Err("section list is empty".to_string());
    }

    let mut seen = std::collections::HashSet::new();
    for (i, section) in sections.iter().enumerate() {
        if section.header.is_empty() {
            return Err(format!("section {} has an empty header", i));
        }
        if !section.is_valid_id() {
            return Err(format!("section {} has invalid id: '{}'", i, section.id));
        }
        if !seen.insert(section.id.as_str()) {
            return Err(format!("duplicate section id: '{}'", section.id));
        }
    }

    Ok(())
}

/// A single search result: a content line and the header of its section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    /// Header of the section that owns the matched line, marker included.
    pub header: String,
    /// The matched content line, exactly as stored in the section.
    pub text: String,
}

impl SearchHit {
    /// Render as the wire form shown to clients: `[<header>] <text>`.
    pub fn render(&self) -> String {
        format!("[{}] {}", self.header, self.text)
    }
}

/// Outcome of a search request.
///
/// `InvalidQuery` and `NoMatches` are successful sentinel outcomes, not
/// errors — callers must be able to distinguish "malformed query" from
/// "search ran, found nothing" from actual hits, and none of the three is a
/// failure of the search itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The query tokenized to zero words; no scoring was performed.
    InvalidQuery,
    /// The query was well-formed but no line anywhere scored above zero.
    NoMatches,
    /// Ranked hits, at most `limit` of them.
    Hits(Vec<SearchHit>),
}

impl SearchOutcome {
    /// Number of hits carried (zero for the sentinel outcomes).
    pub fn len(&self) -> usize {
        match self {
            SearchOutcome::Hits(hits) => hits.len(),
            _ => 0,
        }
    }

    /// True when the outcome carries no hits.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
