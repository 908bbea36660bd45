// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the sveldoc command-line interface.
//!
//! Three subcommands: `serve` to run the stdio MCP server, `search` for a
//! one-shot query from the terminal, and `sections` to list what the
//! segmenter produced. The latter two accept `--file` to work against a
//! local copy of the documentation instead of fetching.

pub mod display;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "sveldoc",
    about = "Svelte documentation search server (MCP over stdio)",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch the documentation and serve it over stdio
    Serve {
        /// Documentation URL (falls back to $SVELDOC_DOCS_URL, then the default)
        #[arg(long)]
        url: Option<String>,
    },

    /// Search the documentation once and print the results
    Search {
        /// Search query
        query: String,

        /// Maximum number of results to return
        #[arg(short, long, default_value = "3")]
        limit: usize,

        /// Read the documentation from a local file instead of fetching
        #[arg(long)]
        file: Option<String>,

        /// Documentation URL (falls back to $SVELDOC_DOCS_URL, then the default)
        #[arg(long)]
        url: Option<String>,
    },

    /// List section ids and headers
    Sections {
        /// Read the documentation from a local file instead of fetching
        #[arg(long)]
        file: Option<String>,

        /// Documentation URL (falls back to $SVELDOC_DOCS_URL, then the default)
        #[arg(long)]
        url: Option<String>,
    },
}
