// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the sveldoc CLI.
//!
//! Minimal coloring: section headers in cyan, match text plain, dim ids in
//! the sections listing. Respects `NO_COLOR` and skips color entirely when
//! stdout is not a TTY, so pipelines get clean text.

use crate::types::{SearchHit, SearchOutcome, Section};
use std::sync::OnceLock;

const CYAN: &str = "\x1b[36m";
const DIM: &str = "\x1b[2m";
const YELLOW: &str = "\x1b[33m";
const RESET: &str = "\x1b[0m";

/// Cached color decision.
static USE_COLOR: OnceLock<bool> = OnceLock::new();

/// Should output be colored? `NO_COLOR` wins, then TTY detection.
fn use_color() -> bool {
    *USE_COLOR.get_or_init(|| {
        std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout)
    })
}

fn paint(text: &str, color: &str) -> String {
    if use_color() {
        format!("{color}{text}{RESET}")
    } else {
        text.to_string()
    }
}

/// Print a search outcome for terminal consumption.
pub fn print_outcome(outcome: &SearchOutcome, query: &str) {
    match outcome {
        SearchOutcome::InvalidQuery => {
            println!("{}", paint("Please provide a search query.", YELLOW));
        }
        SearchOutcome::NoMatches => {
            println!("{}", paint(&format!("No matches found for \"{query}\"."), YELLOW));
        }
        SearchOutcome::Hits(hits) => {
            for hit in hits {
                println!("{}", render_hit(hit));
            }
        }
    }
}

/// One hit: colored header tag, plain text.
fn render_hit(hit: &SearchHit) -> String {
    format!("{} {}", paint(&format!("[{}]", hit.header), CYAN), hit.text)
}

/// Print the sections listing: id, header, line count.
pub fn print_sections(sections: &[Section]) {
    for section in sections {
        println!(
            "{}  {}  {}",
            paint(&section.id, DIM),
            section.header,
            paint(&format!("({} lines)", section.content.len()), DIM)
        );
    }
}
