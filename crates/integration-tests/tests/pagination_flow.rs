//! Cursor-chained pagination over materialized lists, including store
//! contents rehydrated from disk.

#![allow(clippy::unwrap_used)]

use bramble_core::{DEFAULT_PAGE_SIZE, PageError, paginate};
use bramble_integration_tests::test_product;
use bramble_store::{FileBackend, RecentlyViewedStore};

#[test]
fn test_chained_pages_reassemble_the_source() {
    let items: Vec<_> = (0..37).map(|i| test_product(&format!("p{i}"), 100)).collect();

    let mut cursor: Option<String> = None;
    let mut sizes = Vec::new();
    let mut reassembled = Vec::new();

    loop {
        let page = paginate(&items, cursor.as_deref(), DEFAULT_PAGE_SIZE).unwrap();
        assert_eq!(page.total, 37);
        sizes.push(page.data.len());
        reassembled.extend(page.data);
        if !page.has_more {
            assert!(page.next_cursor.is_none());
            break;
        }
        cursor = page.next_cursor;
    }

    assert_eq!(sizes, vec![10, 10, 10, 7]);
    assert_eq!(reassembled, items);
}

#[test]
fn test_paging_a_rehydrated_history() {
    let dir = tempfile::tempdir().unwrap();

    {
        let mut history = RecentlyViewedStore::open(FileBackend::new(dir.path())).unwrap();
        for i in 0..15 {
            history.record(test_product(&format!("p{i}"), 100)).unwrap();
        }
    }

    let history = RecentlyViewedStore::open(FileBackend::new(dir.path())).unwrap();

    let first = paginate(history.items(), None, 10).unwrap();
    assert_eq!(first.data.len(), 10);
    assert!(first.has_more);
    assert_eq!(first.total, 15);
    // Most recent first
    assert_eq!(first.data.first().unwrap().id().as_str(), "p14");

    let second = paginate(history.items(), first.next_cursor.as_deref(), 10).unwrap();
    assert_eq!(second.data.len(), 5);
    assert!(!second.has_more);
    assert_eq!(second.data.last().unwrap().id().as_str(), "p0");
}

#[test]
fn test_stale_cursor_past_the_end_terminates_cleanly() {
    let items: Vec<_> = (0..3).map(|i| test_product(&format!("p{i}"), 100)).collect();

    // A cursor captured against a longer list, replayed after shrinking
    let page = paginate(&items, Some("10"), DEFAULT_PAGE_SIZE).unwrap();
    assert!(page.data.is_empty());
    assert!(!page.has_more);
    assert_eq!(page.total, 3);
}

#[test]
fn test_malformed_cursor_is_a_typed_error() {
    let items: Vec<_> = (0..3).map(|i| test_product(&format!("p{i}"), 100)).collect();

    assert!(matches!(
        paginate(&items, Some("NaN"), DEFAULT_PAGE_SIZE),
        Err(PageError::InvalidCursor(_))
    ));
}
