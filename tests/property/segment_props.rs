//! Segmentation properties: these must hold for arbitrary documents.

use proptest::prelude::*;
use proptest::string::string_regex;
use sveldoc::{segment, validate_sections, SYNTHETIC_SECTION_ID};

fn content_line() -> impl Strategy<Value = String> {
    string_regex("[a-zA-Z0-9 ]{1,40}").unwrap()
}

fn header_line() -> impl Strategy<Value = String> {
    string_regex("# [a-zA-Z][a-zA-Z0-9 ]{0,30}").unwrap()
}

fn document() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![3 => content_line(), 1 => header_line()],
        1..40,
    )
    .prop_map(|lines| lines.join("\n"))
}

proptest! {
    #[test]
    fn non_empty_input_always_yields_sections(text in document()) {
        let sections = segment(&text).unwrap();
        prop_assert!(!sections.is_empty());
        prop_assert!(validate_sections(&sections).is_ok());
    }

    #[test]
    fn headerless_input_yields_one_section_with_all_lines(
        lines in prop::collection::vec(content_line(), 1..30)
    ) {
        let text = lines.join("\n");
        let sections = segment(&text).unwrap();
        prop_assert_eq!(sections.len(), 1);
        prop_assert_eq!(&sections[0].id, SYNTHETIC_SECTION_ID);

        let expected: Vec<String> = lines
            .iter()
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty())
            .collect();
        prop_assert_eq!(&sections[0].content, &expected);
    }

    #[test]
    fn line_count_is_conserved(text in document()) {
        let sections = segment(&text).unwrap();
        let nested: usize = sections.iter().map(|s| s.content.len()).sum();
        let headers = sections.len() - 1; // real headers, synthetic excluded
        let source = text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .count();
        prop_assert_eq!(nested + headers, source);
    }

    #[test]
    fn section_ids_are_unique(text in document()) {
        let sections = segment(&text).unwrap();
        let mut ids: Vec<&String> = sections.iter().map(|s| &s.id).collect();
        ids.sort();
        ids.dedup();
        prop_assert_eq!(ids.len(), sections.len());
    }

    #[test]
    fn segmentation_is_idempotent_on_rejoined_output(text in document()) {
        // Re-serializing sections back to text and segmenting again gives
        // the same structure.
        let sections = segment(&text).unwrap();
        let mut rejoined = String::new();
        for section in sections.iter().skip(1) {
            rejoined.push_str(&section.header);
            rejoined.push('\n');
            for line in &section.content {
                rejoined.push_str(line);
                rejoined.push('\n');
            }
        }
        // Synthetic content goes first, headerless.
        let mut full = sections[0].content.join("\n");
        if !full.is_empty() && !rejoined.is_empty() {
            full.push('\n');
        }
        full.push_str(&rejoined);

        if !full.is_empty() {
            let again = segment(&full).unwrap();
            prop_assert_eq!(again, sections);
        }
    }
}
