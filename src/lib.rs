//! Keyword-relevance search over the Svelte documentation, served over the
//! Model Context Protocol.
//!
//! The system fetches one flat text file, segments it into addressable
//! sections, and answers search and resource-read requests against the
//! resulting list.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────┐     ┌─────────────┐     ┌──────────────┐
//! │  fetch.rs  │────▶│ segment.rs  │────▶│ registry.rs  │
//! │ (one-time  │     │ (sections,  │     │ (published,  │
//! │  download) │     │   slugs)    │     │  read-only)  │
//! └────────────┘     └─────────────┘     └──────┬───────┘
//!                                               │
//!                    ┌─────────────┐     ┌──────▼───────┐
//!                    │ scoring.rs  │◀────│  server.rs   │
//!                    │ search.rs   │     │ (MCP, stdio) │
//!                    └─────────────┘     └──────────────┘
//! ```
//!
//! The section list is built exactly once, before the server loop starts,
//! and is never mutated afterwards — every search is a pure function of
//! `(sections, query)`.
//!
//! # Usage
//!
//! ```
//! use sveldoc::{segment, search, SearchOutcome};
//!
//! let sections = segment("# Routing\nUse a router.").unwrap();
//! match search(&sections, "router", 3) {
//!     SearchOutcome::Hits(hits) => assert_eq!(hits[0].render(), "[# Routing] Use a router."),
//!     other => panic!("unexpected outcome: {other:?}"),
//! }
//! ```

// Module declarations
pub mod cli;
pub mod error;
pub mod fetch;
pub mod registry;
pub mod scoring;
pub mod search;
pub mod segment;
pub mod server;
pub mod types;

// Re-exports for public API
pub use error::{FetchError, RegistryError, SegmentError};
pub use fetch::{DocsFetcher, DEFAULT_DOCS_URL};
pub use registry::{DocRegistry, ResourceEntry};
pub use scoring::{match_score, occurrence_count, tokenize};
pub use search::{search, search_default, DEFAULT_LIMIT};
pub use segment::{segment, slugify};
pub use server::{DocServer, McpRequest, McpResponse};
pub use types::{
    validate_sections, RawLine, SearchHit, SearchOutcome, Section, SYNTHETIC_SECTION_HEADER,
    SYNTHETIC_SECTION_ID,
};
