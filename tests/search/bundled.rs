//! Queries against the site's own corpus.

use folio::{search, search_scored, search_with, suggest, ContentIndex, Kind, SearchOptions};

fn position(hits: &[folio::ScoredRecord<'_>], id: &str) -> Option<usize> {
    hits.iter().position(|h| h.record.id == id)
}

#[test]
fn test_dsge_finds_the_blog_post() {
    let hits = search_scored(ContentIndex::bundled(), "dsge");
    let post = hits
        .iter()
        .find(|h| h.record.id == "blog-understanding-dsge")
        .expect("blog post must match");
    assert!(post.score >= 24, "got {}", post.score);
}

#[test]
fn test_dsge_title_matches_outrank_content_mentions() {
    let hits = search_scored(ContentIndex::bundled(), "dsge");
    let post = position(&hits, "blog-understanding-dsge").unwrap();
    let course = position(&hits, "teach-phd-macro").expect("course mentions dsge");
    assert!(post < course);
}

#[test]
fn test_results_never_exceed_ten() {
    let index = ContentIndex::bundled();
    // "e" is in nearly every record
    let hits = search(index, "e");
    assert_eq!(hits.len(), 10);
}

#[test]
fn test_sorted_by_score() {
    let hits = search_scored(ContentIndex::bundled(), "monetary policy households");
    assert!(!hits.is_empty());
    for pair in hits.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
}

#[test]
fn test_filter_to_teaching() {
    let options = SearchOptions {
        kinds: Some(vec![Kind::Teaching]),
        ..Default::default()
    };
    let hits = search_with(ContentIndex::bundled(), "macroeconomics", &options);
    assert!(!hits.is_empty());
    assert!(hits.iter().all(|h| h.record.kind == Kind::Teaching));
}

#[test]
fn test_suggest_mon() {
    let found = suggest(ContentIndex::bundled(), "Mon");
    assert_eq!(found, vec!["monetary policy", "monetary", "money"]);
}

#[test]
fn test_suggest_on_bundled_respects_cap() {
    let found = suggest(ContentIndex::bundled(), "c");
    assert!(found.len() <= 5);
    assert!(found.iter().all(|s| s.starts_with('c')));
}

#[test]
fn test_no_match_on_bundled() {
    assert!(search(ContentIndex::bundled(), "zzzzznonexistentterm").is_empty());
}
