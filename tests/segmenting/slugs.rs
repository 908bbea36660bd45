//! Slug derivation and the collision suffix policy.

use sveldoc::{segment, slugify};

#[test]
fn slugs_are_lowercased_and_hyphenated() {
    assert_eq!(slugify("# Advanced Routing"), "advanced-routing");
    assert_eq!(slugify("# Template Syntax: {#if}"), "template-syntax-if");
    assert_eq!(slugify("# svelte/motion"), "svelte-motion");
}

#[test]
fn marker_residue_is_stripped() {
    // The "# " marker is non-alphanumeric, so it collapses into the leading
    // separator, which must not survive.
    assert!(!slugify("# Routing").starts_with('-'));
    assert_eq!(slugify("# Routing"), "routing");
}

#[test]
fn digits_survive_slugging() {
    assert_eq!(slugify("# Svelte 5 migration"), "svelte-5-migration");
}

#[test]
fn symbol_only_headers_fall_back() {
    assert_eq!(slugify("# ***"), "section");
    assert_eq!(slugify("# — — —"), "section");
}

#[test]
fn collision_suffixes_are_deterministic_and_ordered() {
    let text = "# FAQ\none\n# Guide\ntwo\n# FAQ\nthree\n# FAQ\nfour";
    let sections = segment(text).unwrap();
    let ids: Vec<&str> = sections.iter().skip(1).map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["faq", "guide", "faq-2", "faq-3"]);
}

#[test]
fn colliding_fallback_slugs_also_get_suffixes() {
    let sections = segment("# ???\na\n# !!!\nb").unwrap();
    assert_eq!(sections[1].id, "section");
    assert_eq!(sections[2].id, "section-2");
}

#[test]
fn distinct_headers_with_same_slug_stay_distinct_sections() {
    // "# FAQ" and "# faq" collide as slugs but remain separate,
    // individually addressable sections.
    let sections = segment("# FAQ\na\n# faq\nb").unwrap();
    assert_eq!(sections[1].id, "faq");
    assert_eq!(sections[2].id, "faq-2");
    assert_eq!(sections[2].content, vec!["b"]);
}
