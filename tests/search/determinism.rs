//! Same index, same query, same answer. Also across threads.

use crate::common::*;
use folio::{search, search_scored, suggest, ContentIndex};
use std::thread;

#[test]
fn test_search_deterministic() {
    let index = graded_index(15);
    let first = search_scored(&index, "growth paper");
    for run in 0..10 {
        let again = search_scored(&index, "growth paper");
        assert_eq!(first, again, "run {} differs", run);
    }
}

#[test]
fn test_suggest_deterministic() {
    let index = ContentIndex::bundled();
    let first = suggest(index, "m");
    for run in 0..10 {
        assert_eq!(first, suggest(index, "m"), "run {} differs", run);
    }
}

#[test]
fn test_independent_indices_agree() {
    let a = dsge_index();
    let b = dsge_index();
    assert_eq!(ids(&search(&a, "dsge")), ids(&search(&b, "dsge")));
}

#[test]
fn test_concurrent_searches_share_the_index() {
    let index = ContentIndex::bundled();
    let expected: Vec<String> = search(index, "monetary policy")
        .iter()
        .map(|r| r.id.clone())
        .collect();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            thread::spawn(move || {
                search(ContentIndex::bundled(), "monetary policy")
                    .iter()
                    .map(|r| r.id.clone())
                    .collect::<Vec<String>>()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn test_scoped_threads_borrow_local_index() {
    let index = dsge_index();
    let expected = search_scored(&index, "dsge");

    thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                assert_eq!(search_scored(&index, "dsge"), expected);
                assert_eq!(suggest(&index, "ds"), vec!["dsge"]);
            });
        }
    });
}
