//! Autocomplete behavior.

use crate::common::*;
use folio::{suggest, MAX_SUGGESTIONS};

#[test]
fn test_every_suggestion_starts_with_prefix() {
    let index = dsge_index();
    for prefix in ["d", "DS", " m", "un", "po"] {
        let normalized = prefix.trim().to_lowercase();
        for s in suggest(&index, prefix) {
            assert!(s.starts_with(&normalized), "{:?} from {:?}", s, prefix);
            assert_eq!(s, s.to_lowercase());
        }
    }
}

#[test]
fn test_title_words_must_be_longer_than_prefix() {
    let index = make_index(vec![make_record("a", "Growth Theory", "x")]);
    assert_eq!(suggest(&index, "growt"), vec!["growth"]);
    assert!(suggest(&index, "growth").is_empty());
    assert!(suggest(&index, "growths").is_empty());
}

#[test]
fn test_exact_tag_is_returned_but_exact_title_word_is_not() {
    let index = make_index(vec![
        make_record("title", "Policy", "x"),
        make_tagged_record("tag", "Notes", "x", &["Policy"]),
    ]);
    assert_eq!(suggest(&index, "policy"), vec!["policy"]);

    let title_only = make_index(vec![make_record("title", "Policy", "x")]);
    assert!(suggest(&title_only, "policy").is_empty());
}

#[test]
fn test_dsge_prefix() {
    let index = dsge_index();
    // Title word "dsge" and tag "DSGE" collapse into one suggestion
    assert_eq!(suggest(&index, "ds"), vec!["dsge"]);
    // Full tag still offered back
    assert_eq!(suggest(&index, "dsge"), vec!["dsge"]);
}

#[test]
fn test_scan_is_record_by_record() {
    // Record a's tag comes before record b's title words
    let index = make_index(vec![
        make_tagged_record("a", "Trade Policy", "x", &["Tariffs"]),
        make_record("b", "Tax Incidence", "y"),
    ]);
    assert_eq!(suggest(&index, "t"), vec!["trade", "tariffs", "tax"]);
}

#[test]
fn test_title_words_before_tags_within_a_record() {
    let index = make_index(vec![make_tagged_record(
        "a",
        "Labor Markets",
        "x",
        &["Labour"],
    )]);
    assert_eq!(suggest(&index, "lab"), vec!["labor", "labour"]);
}

#[test]
fn test_cap_and_uniqueness() {
    let index = make_index(vec![
        make_tagged_record("a", "Macro Macro Models", "x", &["Macro", "Macroeconomics"]),
        make_record("b", "Macroprudential Markets Matter", "y"),
        make_record("c", "Measurement Methods", "z"),
    ]);
    let found = suggest(&index, "m");
    assert_eq!(found.len(), MAX_SUGGESTIONS);
    assert_eq!(
        found,
        vec!["macro", "models", "macroeconomics", "macroprudential", "markets"]
    );

    let mut deduped = found.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(deduped.len(), found.len());
}

#[test]
fn test_content_and_excerpt_are_not_sources() {
    let index = make_index(vec![make_kind_record(
        "a",
        folio::Kind::Blog,
        "Notes",
        "unemployment insurance",
        "unemployment dynamics",
    )]);
    assert!(suggest(&index, "unem").is_empty());
}
