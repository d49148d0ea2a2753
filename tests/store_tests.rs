//! BoardStore Tests
//!
//! Tests verify:
//! - Board ordering (most-recently-created first)
//! - Post ordering (oldest first) and display id recomputation
//! - Outcome mapping for every operation
//! - The structural name-length limit

use bytes::Bytes;
use corkboard::error::BoardError;
use corkboard::store::{BoardStore, StoreOutcome, MAX_BOARD_NAME};

/// Unwrap the body of an `Ok` outcome
fn body_of(outcome: StoreOutcome) -> Bytes {
    match outcome {
        StoreOutcome::Ok(Some(body)) => body,
        other => panic!("expected Ok with body, got {other:?}"),
    }
}

// =============================================================================
// Board Operation Tests
// =============================================================================

#[test]
fn test_new_store_is_empty() {
    let store = BoardStore::new();
    assert_eq!(store.board_count(), 0);
    assert_eq!(store.list_boards(), StoreOutcome::NotFound);
}

#[test]
fn test_create_board() {
    let mut store = BoardStore::new();
    assert_eq!(store.create_board("tech").unwrap(), StoreOutcome::Created);
    assert_eq!(store.board_count(), 1);
}

#[test]
fn test_create_duplicate_board_conflicts() {
    let mut store = BoardStore::new();
    assert_eq!(store.create_board("x").unwrap(), StoreOutcome::Created);
    assert_eq!(store.create_board("x").unwrap(), StoreOutcome::Conflict);
    assert_eq!(store.board_count(), 1);
}

#[test]
fn test_board_names_are_case_sensitive() {
    let mut store = BoardStore::new();
    assert_eq!(store.create_board("Tech").unwrap(), StoreOutcome::Created);
    assert_eq!(store.create_board("tech").unwrap(), StoreOutcome::Created);
    assert_eq!(store.board_count(), 2);
}

#[test]
fn test_list_boards_newest_first() {
    let mut store = BoardStore::new();
    store.create_board("first").unwrap();
    store.create_board("second").unwrap();
    store.create_board("third").unwrap();

    let body = body_of(store.list_boards());
    assert_eq!(&body[..], b"third\nsecond\nfirst\n");
}

#[test]
fn test_delete_board() {
    let mut store = BoardStore::new();
    store.create_board("tech").unwrap();

    assert_eq!(store.delete_board("tech"), StoreOutcome::Ok(None));
    assert_eq!(store.board_count(), 0);
    assert_eq!(store.delete_board("tech"), StoreOutcome::NotFound);
}

#[test]
fn test_delete_board_takes_posts_with_it() {
    let mut store = BoardStore::new();
    store.create_board("tech").unwrap();
    store.create_post("tech", Bytes::from_static(b"hello"));

    assert_eq!(store.delete_board("tech"), StoreOutcome::Ok(None));
    assert_eq!(store.list_posts("tech"), StoreOutcome::NotFound);
}

#[test]
fn test_name_over_limit_is_fatal_error() {
    let mut store = BoardStore::new();
    let long = "x".repeat(MAX_BOARD_NAME + 1);

    match store.create_board(&long) {
        Err(BoardError::NameTooLong { len, max }) => {
            assert_eq!(len, MAX_BOARD_NAME + 1);
            assert_eq!(max, MAX_BOARD_NAME);
        }
        other => panic!("expected NameTooLong, got {other:?}"),
    }
    assert_eq!(store.board_count(), 0);
}

#[test]
fn test_name_at_limit_is_accepted() {
    let mut store = BoardStore::new();
    let name = "x".repeat(MAX_BOARD_NAME);
    assert_eq!(store.create_board(&name).unwrap(), StoreOutcome::Created);
}

// =============================================================================
// Post Operation Tests
// =============================================================================

#[test]
fn test_create_post_appends_oldest_first() {
    let mut store = BoardStore::new();
    store.create_board("tech").unwrap();

    assert_eq!(
        store.create_post("tech", Bytes::from_static(b"one")),
        StoreOutcome::Created
    );
    assert_eq!(
        store.create_post("tech", Bytes::from_static(b"two")),
        StoreOutcome::Created
    );

    let body = body_of(store.list_posts("tech"));
    assert_eq!(&body[..], b"[tech]\n1. one\n2. two\n");
}

#[test]
fn test_create_post_on_missing_board() {
    let mut store = BoardStore::new();
    assert_eq!(
        store.create_post("nope", Bytes::from_static(b"hello")),
        StoreOutcome::NotFound
    );
    // nothing was mutated
    assert_eq!(store.board_count(), 0);
}

#[test]
fn test_list_posts_on_empty_board() {
    let mut store = BoardStore::new();
    store.create_board("tech").unwrap();

    let body = body_of(store.list_posts("tech"));
    assert_eq!(&body[..], b"[tech]\n");
}

#[test]
fn test_list_posts_on_missing_board() {
    let store = BoardStore::new();
    assert_eq!(store.list_posts("nope"), StoreOutcome::NotFound);
}

#[test]
fn test_delete_post_shifts_display_ids() {
    let mut store = BoardStore::new();
    store.create_board("tech").unwrap();
    store.create_post("tech", Bytes::from_static(b"a"));
    store.create_post("tech", Bytes::from_static(b"b"));
    store.create_post("tech", Bytes::from_static(b"c"));

    assert_eq!(store.delete_post("tech", 2), StoreOutcome::Ok(None));

    // ids are recomputed, not preserved
    let body = body_of(store.list_posts("tech"));
    assert_eq!(&body[..], b"[tech]\n1. a\n2. c\n");
}

#[test]
fn test_delete_post_out_of_range() {
    let mut store = BoardStore::new();
    store.create_board("tech").unwrap();
    store.create_post("tech", Bytes::from_static(b"a"));

    assert_eq!(store.delete_post("tech", 0), StoreOutcome::NotFound);
    assert_eq!(store.delete_post("tech", 2), StoreOutcome::NotFound);
    assert_eq!(store.delete_post("nope", 1), StoreOutcome::NotFound);
}

#[test]
fn test_update_post_in_place() {
    let mut store = BoardStore::new();
    store.create_board("tech").unwrap();
    store.create_post("tech", Bytes::from_static(b"a"));
    store.create_post("tech", Bytes::from_static(b"b"));

    assert_eq!(
        store.update_post("tech", 1, Bytes::from_static(b"edited")),
        StoreOutcome::Ok(None)
    );

    let body = body_of(store.list_posts("tech"));
    assert_eq!(&body[..], b"[tech]\n1. edited\n2. b\n");
}

#[test]
fn test_update_post_out_of_range_leaves_posts_unchanged() {
    let mut store = BoardStore::new();
    store.create_board("tech").unwrap();
    store.create_post("tech", Bytes::from_static(b"a"));

    assert_eq!(
        store.update_post("tech", 5, Bytes::from_static(b"edited")),
        StoreOutcome::NotFound
    );
    assert_eq!(
        store.update_post("tech", 0, Bytes::from_static(b"edited")),
        StoreOutcome::NotFound
    );

    let body = body_of(store.list_posts("tech"));
    assert_eq!(&body[..], b"[tech]\n1. a\n");
}

#[test]
fn test_update_post_on_missing_board() {
    let mut store = BoardStore::new();
    assert_eq!(
        store.update_post("nope", 1, Bytes::from_static(b"x")),
        StoreOutcome::NotFound
    );
}

#[test]
fn test_post_content_is_opaque_bytes() {
    let mut store = BoardStore::new();
    store.create_board("bin").unwrap();

    let content = Bytes::from_static(&[0x00, 0xFF, 0x80, b'!']);
    assert_eq!(store.create_post("bin", content), StoreOutcome::Created);

    let body = body_of(store.list_posts("bin"));
    assert_eq!(&body[..], b"[bin]\n1. \x00\xFF\x80!\n");
}
