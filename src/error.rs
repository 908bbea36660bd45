// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types, one enum per area.
//!
//! Note what is deliberately *not* here: an empty or whitespace-only query
//! and a search that finds nothing are sentinel variants of
//! [`crate::SearchOutcome`], never errors. Segmenter and fetch failures are
//! synchronous and leave no partial state behind — a failed segmentation
//! never publishes a half-built section list.

use thiserror::Error;

/// Errors from the document segmenter.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SegmentError {
    /// Segmentation received empty input; fatal for that fetch attempt.
    #[error("document is empty")]
    EmptyDocument,
    /// Defensive invariant violation. Unreachable given the synthetic
    /// leading section, but checked rather than assumed.
    #[error("segmentation produced no sections")]
    NoSectionsProduced,
}

/// Errors from the one-time document fetch.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The configured documentation URL failed to parse or uses a scheme
    /// other than http/https.
    #[error("invalid documentation URL: {0}")]
    InvalidUrl(String),
    /// A single fetch attempt failed (network, HTTP status, or body decode).
    #[error("fetch attempt failed: {0}")]
    RequestFailed(String),
    /// All retry attempts were exhausted. Fatal at startup: with no prior
    /// successful load the process cannot serve.
    #[error("document fetch failed after {attempts} attempts: {last_error}")]
    Exhausted {
        attempts: u32,
        last_error: String,
    },
}

/// Errors from section lookup by resource identifier.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// The identifier does not match the
    /// `svelte-docs:///section/<id>[/content]` form.
    #[error("unrecognized resource URI: {0}")]
    UnrecognizedUri(String),
    /// The identifier parsed but names no section in the current document.
    #[error("no section with id '{0}'")]
    SectionNotFound(String),
}
