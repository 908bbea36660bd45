// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The document segmenter: raw fetched text in, ordered sections out.
//!
//! The source document is a flat text file where `"# "`-prefixed lines mark
//! section boundaries. Segmentation is a single ordered walk:
//!
//! 1. split on line breaks, drop lines that are empty after trimming;
//! 2. open the synthetic leading section so content before the first header
//!    has somewhere to live;
//! 3. each header line closes the current section and opens a new one, with
//!    one exception — a header whose text *is* the synthetic leading header
//!    is dropped entirely, guarding against the source document containing
//!    that exact literal;
//! 4. close the final section.
//!
//! Pure and deterministic: same text in, same sections out, no side effects.
//! Either the whole walk succeeds and the caller gets a complete list, or it
//! fails and the caller keeps whatever list it had before.

use crate::error::SegmentError;
use crate::types::{RawLine, Section, SYNTHETIC_SECTION_HEADER};
use std::collections::HashMap;

/// Fallback slug for headers with no alphanumeric characters at all.
const EMPTY_SLUG_FALLBACK: &str = "section";

/// Segment raw document text into an ordered list of sections.
///
/// Fails with [`SegmentError::EmptyDocument`] on empty input and
/// [`SegmentError::NoSectionsProduced`] if the walk somehow yields nothing
/// (unreachable given the synthetic leading section, but checked).
pub fn segment(raw_text: &str) -> Result<Vec<Section>, SegmentError> {
    if raw_text.is_empty() {
        return Err(SegmentError::EmptyDocument);
    }

    let lines = raw_text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(RawLine::classify);

    let mut sections: Vec<Section> = Vec::new();
    let mut current = Section::synthetic();
    // Collision suffixes: slug -> number of times seen so far.
    let mut slug_counts: HashMap<String, usize> = HashMap::new();

    for line in lines {
        if line.is_header {
            // The literal synthetic header is a no-op: it neither opens a
            // section nor counts as content, so a source document containing
            // it cannot shadow the real synthetic section.
            if line.text == SYNTHETIC_SECTION_HEADER {
                continue;
            }
            sections.push(current);
            let id = unique_slug(&line.text, &mut slug_counts);
            current = Section {
                id,
                header: line.text,
                content: Vec::new(),
            };
        } else {
            current.content.push(line.text);
        }
    }
    sections.push(current);

    if sections.is_empty() {
        return Err(SegmentError::NoSectionsProduced);
    }
    Ok(sections)
}

/// Derive a slug from header text: lowercase, collapse every run of
/// non-`[a-z0-9]` characters to a single `-`, strip the leading residue the
/// `"# "` marker leaves behind.
///
/// `"# Advanced Routing"` → `"advanced-routing"`, `"# $state"` → `"state"`.
pub fn slugify(header: &str) -> String {
    let mut slug = String::with_capacity(header.len());
    let mut pending_separator = false;

    for c in header.to_lowercase().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(c);
        } else {
            pending_separator = true;
        }
    }

    if slug.is_empty() {
        EMPTY_SLUG_FALLBACK.to_string()
    } else {
        slug
    }
}

/// Slugify with the collision policy applied: the first occurrence keeps the
/// bare slug, later ones get `-2`, `-3`, … in source order.
fn unique_slug(header: &str, slug_counts: &mut HashMap<String, usize>) -> String {
    let base = slugify(header);
    let count = slug_counts.entry(base.clone()).or_insert(0);
    *count += 1;
    if *count == 1 {
        base
    } else {
        format!("{}-{}", base, count)
    }
}
