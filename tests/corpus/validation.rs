//! Invariant checks on loaded and bundled corpora.

use crate::common::*;
use folio::{validate_records, ContentIndex, IndexError, InvariantError, Kind, PORTFOLIO};
use std::collections::HashSet;

#[test]
fn test_duplicate_id_rejected() {
    let json = r#"[
        {"id":"a","title":"One","content":"x","kind":"page","target":"a"},
        {"id":"a","title":"Two","content":"y","kind":"page","target":"b"}
    ]"#;
    match ContentIndex::from_json(json) {
        Err(IndexError::Invariant(InvariantError::DuplicateId { id, first, second })) => {
            assert_eq!(id, "a");
            assert_eq!((first, second), (0, 1));
        }
        other => panic!("expected duplicate id, got {:?}", other.map(|i| i.len())),
    }
}

#[test]
fn test_blank_title_rejected() {
    let err = ContentIndex::new(vec![make_record("a", "  ", "x")]).unwrap_err();
    assert_eq!(err, InvariantError::EmptyTitle { id: "a".to_string() });
}

#[test]
fn test_empty_content_rejected() {
    let err = ContentIndex::new(vec![make_record("a", "A", "")]).unwrap_err();
    assert_eq!(err, InvariantError::EmptyContent { id: "a".to_string() });
}

#[test]
fn test_empty_id_rejected() {
    let err = ContentIndex::new(vec![make_record("ok", "A", "x"), make_record("", "B", "y")])
        .unwrap_err();
    assert_eq!(err, InvariantError::EmptyId { position: 1 });
}

#[test]
fn test_error_messages_name_the_problem() {
    let err = ContentIndex::new(vec![make_record("a", "A", "x"), make_record("a", "B", "y")])
        .unwrap_err();
    let message = err.to_string();
    assert!(message.contains("'a'"), "{}", message);
    assert!(message.contains("duplicate"), "{}", message);
}

#[test]
fn test_bundled_corpus_is_valid() {
    let index = ContentIndex::bundled();
    assert_eq!(validate_records(index.records()), Ok(()));
    assert_eq!(index.len(), PORTFOLIO.len());

    let ids: HashSet<&str> = index.records().iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids.len(), index.len());
}

#[test]
fn test_bundled_corpus_covers_every_kind() {
    let index = ContentIndex::bundled();
    for kind in Kind::ALL {
        assert!(index.records().iter().any(|r| r.kind == kind), "no {}", kind);
    }
}

#[test]
fn test_bundled_lookup() {
    let index = ContentIndex::bundled();
    let post = index.get("blog-understanding-dsge").unwrap();
    assert_eq!(post.title, "Understanding DSGE Models");
    assert!(index.get("missing").is_none());
}
