//! Tests for anchor identifier sanitization.

use proptest::prelude::*;
use questsmith_core::{FALLBACK_ID, is_valid_id, lines_to_list, list_to_lines, sanitize, suggest_id};

#[test]
fn test_sanitize_lowercases_and_dashes() {
    assert_eq!(sanitize("The Old Mill"), "the-old-mill");
    assert_eq!(sanitize("  padded  "), "padded");
}

#[test]
fn test_sanitize_transliterates_umlauts() {
    assert_eq!(sanitize("Größe"), "groesse");
    assert_eq!(sanitize("Übergang Ärger Öl"), "uebergang-aerger-oel");
}

#[test]
fn test_sanitize_strips_edge_dashes() {
    assert_eq!(sanitize("--gate--"), "gate");
    assert_eq!(sanitize("!!gate!!"), "gate");
}

#[test]
fn test_sanitize_falls_back_for_empty_input() {
    assert_eq!(sanitize(""), FALLBACK_ID);
    assert_eq!(sanitize("   "), FALLBACK_ID);
    assert_eq!(sanitize("?!*"), FALLBACK_ID);
    assert_eq!(sanitize("---"), FALLBACK_ID);
}

#[test]
fn test_sanitize_replaces_other_scripts() {
    assert_eq!(sanitize("café noir"), "caf-noir");
    assert_eq!(sanitize("дом"), FALLBACK_ID);
}

#[test]
fn test_suggest_id_uses_title() {
    assert_eq!(suggest_id("Start: Ardea"), "start-ardea");
}

#[test]
fn test_lines_drop_blank_entries() {
    let items = lines_to_list("one\n\n  two  \n\t\nthree");
    assert_eq!(items, vec!["one", "two", "three"]);
    assert_eq!(list_to_lines(&items), "one\ntwo\nthree");
    assert!(lines_to_list("").is_empty());
}

proptest! {
    #[test]
    fn prop_sanitize_matches_anchor_pattern(raw in ".*") {
        let id = sanitize(&raw);
        prop_assert!(is_valid_id(&id), "{:?} -> {:?}", raw, id);
        prop_assert!(!id.starts_with('-') && !id.ends_with('-'));
        prop_assert!(!id.contains("--"));
    }

    #[test]
    fn prop_sanitize_is_idempotent(raw in ".*") {
        let once = sanitize(&raw);
        prop_assert_eq!(sanitize(&once), once);
    }

    #[test]
    fn prop_lines_round_trip_clean_lists(items in prop::collection::vec("[a-z][a-z ]{0,8}[a-z]", 0..6)) {
        prop_assert_eq!(lines_to_list(&list_to_lines(&items)), items);
    }
}
