//! Ranking tests: field weights, stacking, ties and truncation.

use crate::common::*;
use folio::{search, search_scored, search_with, Kind, SearchOptions, MAX_RESULTS};

#[test]
fn test_dsge_scenario_scores_every_rule() {
    let index = dsge_index();
    let hits = search_scored(&index, "dsge");

    let post = hits
        .iter()
        .find(|h| h.record.id == "dsge-post")
        .expect("post should match");
    // title 10 + content 5 + tag 7 + combined 2
    assert!(post.score >= 24, "got {}", post.score);
    assert_eq!(post.score, 24);
}

#[test]
fn test_dsge_scenario_ranks_post_above_content_only() {
    let index = dsge_index();
    let hits = search_scored(&index, "dsge");

    assert_eq!(hits.len(), 2, "the CV must not match");
    assert_eq!(hits[0].record.id, "dsge-post");
    assert_eq!(hits[1].record.id, "content-only");
    assert_eq!(hits[1].score, 7);
}

#[test]
fn test_title_match_outranks_content_match() {
    // Content-only record first in corpus order, so only the score can lift
    // the title match above it.
    let index = make_index(vec![
        make_record("body", "Notes", "remarks on unemployment"),
        make_record("head", "Unemployment", "notes"),
    ]);
    let hits = search(&index, "unemployment");
    assert_eq!(ids(&hits), vec!["head", "body"]);
}

#[test]
fn test_tag_outranks_content_and_excerpt() {
    let index = make_index(vec![
        make_kind_record("excerpt", Kind::Blog, "A", "x", "about trade"),
        make_record("content", "B", "about trade"),
        make_tagged_record("tag", "C", "x", &["Trade"]),
    ]);
    let hits = search_scored(&index, "trade");
    let ranked: Vec<(&str, u32)> = hits.iter().map(|h| (h.record.id.as_str(), h.score)).collect();
    assert_eq!(ranked, vec![("tag", 9), ("content", 7), ("excerpt", 5)]);
}

#[test]
fn test_multi_term_scores_sum() {
    let index = make_index(vec![make_record("a", "Monetary Policy", "rates")]);
    let single_a = search_scored(&index, "monetary")[0].score;
    let single_b = search_scored(&index, "rates")[0].score;
    let both = search_scored(&index, "monetary rates")[0].score;
    assert_eq!(both, single_a + single_b);
}

#[test]
fn test_partial_term_match_still_ranks() {
    // Only one of the two terms matches; the record still comes back.
    let index = make_index(vec![make_record("a", "Banking", "deposits")]);
    let hits = search_scored(&index, "banking zzz");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].score, 12);
}

#[test]
fn test_repeated_term_doubles_score() {
    let index = make_index(vec![make_record("econ", "Econometrics", "once")]);
    let once = search_scored(&index, "econ")[0].score;
    let twice = search_scored(&index, "econ econ")[0].score;
    assert!(twice > once);
    assert_eq!(twice, once * 2);
}

#[test]
fn test_repeated_term_can_reorder_results() {
    // "growth" repeated outweighs a single "labor" title hit
    let index = make_index(vec![
        make_record("labor", "Labor", "x"),
        make_record("growth", "Notes", "growth"),
    ]);
    assert_eq!(ids(&search(&index, "labor growth")), vec!["labor", "growth"]);
    assert_eq!(
        ids(&search(&index, "labor growth growth")),
        vec!["growth", "labor"]
    );
}

#[test]
fn test_equal_scores_keep_corpus_order() {
    let index = make_index(vec![
        make_record("c", "Fiscal", "x"),
        make_record("a", "Fiscal", "y"),
        make_record("b", "Fiscal", "z"),
    ]);
    // No secondary sort on id or title
    assert_eq!(ids(&search(&index, "fiscal")), vec!["c", "a", "b"]);
}

#[test]
fn test_truncates_to_ten_highest() {
    let index = graded_index(15);
    let hits = search_scored(&index, "growth");

    assert_eq!(hits.len(), MAX_RESULTS);
    let ranked: Vec<&str> = hits.iter().map(|h| h.record.id.as_str()).collect();
    assert_eq!(
        ranked,
        vec!["r0", "r6", "r12", "r3", "r9", "r2", "r4", "r8", "r10", "r14"]
    );
    for pair in hits.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
}

#[test]
fn test_full_records_are_returned() {
    let index = dsge_index();
    let hits = search(&index, "dsge");
    let post = hits[0];
    assert_eq!(post, &dsge_post());
    assert_eq!(post.target, "blog");
    assert_eq!(post.kind, Kind::Blog);
}

#[test]
fn test_kind_filter() {
    let index = make_index(vec![
        make_kind_record("p", Kind::Publication, "Tax Paper", "taxes", "x"),
        make_kind_record("t", Kind::Teaching, "Tax Course", "taxes", "x"),
        make_record("page", "Taxes", "x"),
    ]);
    let options = SearchOptions {
        kinds: Some(vec![Kind::Teaching, Kind::Publication]),
        ..Default::default()
    };
    let hits = search_with(&index, "tax", &options);
    let ranked: Vec<&str> = hits.iter().map(|h| h.record.id.as_str()).collect();
    assert_eq!(ranked, vec!["p", "t"]);
}
