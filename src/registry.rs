// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Section addressing: the immutable published document and its URIs.
//!
//! Once segmentation succeeds the section list is published into a
//! [`DocRegistry`] and never mutated again. Every section is addressable in
//! two forms:
//!
//! - `svelte-docs:///section/<id>` — the header line;
//! - `svelte-docs:///section/<id>/content` — the content lines joined with
//!   newlines (possibly empty, for back-to-back headers).
//!
//! Lookup failures are caller-visible and never fatal to the process.

use crate::error::RegistryError;
use crate::types::{validate_sections, Section};
use serde::Serialize;

/// URI prefix every section resource lives under.
pub const SECTION_URI_PREFIX: &str = "svelte-docs:///section/";

/// Suffix selecting the joined-content form of a section.
pub const CONTENT_SUFFIX: &str = "/content";

/// One entry in a `resources/list` reply.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ResourceEntry {
    pub uri: String,
    pub name: String,
    pub mime_type: String,
}

/// The published, read-only section list with lookup by resource URI.
#[derive(Debug, Clone)]
pub struct DocRegistry {
    sections: Vec<Section>,
}

impl DocRegistry {
    /// Publish a section list, running the defensive invariant check first.
    ///
    /// The error case means the segmenter broke its own contract; callers
    /// treat it as fatal and keep whatever registry they had before.
    pub fn publish(sections: Vec<Section>) -> Result<Self, String> {
        validate_sections(&sections)?;
        Ok(DocRegistry { sections })
    }

    /// The sections, in source order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Enumerate both URI forms for every section.
    pub fn list(&self) -> Vec<ResourceEntry> {
        let mut entries = Vec::with_capacity(self.sections.len() * 2);
        for section in &self.sections {
            entries.push(ResourceEntry {
                uri: format!("{}{}", SECTION_URI_PREFIX, section.id),
                name: section.header.clone(),
                mime_type: "text/plain".to_string(),
            });
            entries.push(ResourceEntry {
                uri: format!("{}{}{}", SECTION_URI_PREFIX, section.id, CONTENT_SUFFIX),
                name: format!("{} (content)", section.header),
                mime_type: "text/plain".to_string(),
            });
        }
        entries
    }

    /// Resolve a resource URI to its text.
    ///
    /// Header form returns the header line; content form returns the joined
    /// content lines — an empty string for an empty section, which is a
    /// legitimate read, not an error.
    pub fn resolve(&self, uri: &str) -> Result<String, RegistryError> {
        let Some(rest) = uri.strip_prefix(SECTION_URI_PREFIX) else {
            return Err(RegistryError::UnrecognizedUri(uri.to_string()));
        };

        let (id, want_content) = match rest.strip_suffix(CONTENT_SUFFIX) {
            Some(id) => (id, true),
            None => (rest, false),
        };
        if id.is_empty() || id.contains('/') {
            return Err(RegistryError::UnrecognizedUri(uri.to_string()));
        }

        let section = self
            .sections
            .iter()
            .find(|s| s.id == id)
            .ok_or_else(|| RegistryError::SectionNotFound(id.to_string()))?;

        if want_content {
            Ok(section.content.join("\n"))
        } else {
            Ok(section.header.clone())
        }
    }
}
