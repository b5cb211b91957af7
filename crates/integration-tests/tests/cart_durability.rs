//! Cart durability through a real file backend.
//!
//! Each test roots a `FileBackend` in a fresh temporary directory, mutates
//! the cart, then opens a second store over the same directory to prove the
//! snapshot round-trips.

#![allow(clippy::unwrap_used)]

use bramble_core::ProductId;
use bramble_integration_tests::test_product;
use bramble_store::{CartStore, FileBackend};
use rust_decimal::Decimal;

// =============================================================================
// Durability
// =============================================================================

#[test]
fn test_cart_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();

    {
        let mut cart = CartStore::open(FileBackend::new(dir.path())).unwrap();
        cart.add(test_product("jam", 1250)).unwrap();
        cart.add(test_product("jam", 1250)).unwrap();
        cart.add(test_product("honey", 900)).unwrap();
    }

    let reopened = CartStore::open(FileBackend::new(dir.path())).unwrap();
    assert_eq!(reopened.lines().len(), 2);
    assert_eq!(reopened.total_quantity(), 3);
    assert_eq!(reopened.subtotal(), Decimal::new(3400, 2));

    let first = reopened.lines().first().unwrap();
    assert_eq!(first.id().as_str(), "jam");
    assert_eq!(first.quantity, 2);
    assert_eq!(first.product.title, "Product jam");
}

#[test]
fn test_decrement_to_zero_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let jam = ProductId::new("jam");

    {
        let mut cart = CartStore::open(FileBackend::new(dir.path())).unwrap();
        cart.add(test_product("jam", 1250)).unwrap();
        cart.decrement(&jam).unwrap();
    }

    let reopened = CartStore::open(FileBackend::new(dir.path())).unwrap();
    assert!(reopened.is_empty());
    assert_eq!(reopened.total_quantity(), 0);
}

#[test]
fn test_clear_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();

    {
        let mut cart = CartStore::open(FileBackend::new(dir.path())).unwrap();
        cart.add(test_product("jam", 1250)).unwrap();
        cart.clear().unwrap();
    }

    let reopened = CartStore::open(FileBackend::new(dir.path())).unwrap();
    assert!(reopened.is_empty());
    assert_eq!(reopened.subtotal(), Decimal::ZERO);
}

// =============================================================================
// Corruption recovery
// =============================================================================

#[test]
fn test_corrupt_snapshot_file_resets_to_empty_cart() {
    let dir = tempfile::tempdir().unwrap();

    {
        let mut cart = CartStore::open(FileBackend::new(dir.path())).unwrap();
        cart.add(test_product("jam", 1250)).unwrap();
    }

    // Clobber the snapshot with garbage, as a crashed or foreign writer might
    std::fs::write(dir.path().join("cart.json"), "v2::{binary-ish garbage}").unwrap();

    let mut reopened = CartStore::open(FileBackend::new(dir.path())).unwrap();
    assert!(reopened.is_empty());

    // The store is usable again and persists over the garbage
    reopened.add(test_product("honey", 900)).unwrap();
    let reread = CartStore::open(FileBackend::new(dir.path())).unwrap();
    assert_eq!(reread.total_quantity(), 1);
}

#[test]
fn test_stores_do_not_share_state() {
    let dir = tempfile::tempdir().unwrap();

    let mut cart = CartStore::open(FileBackend::new(dir.path())).unwrap();
    cart.add(test_product("jam", 1250)).unwrap();

    // The history key is untouched by cart writes
    let history =
        bramble_store::RecentlyViewedStore::open(FileBackend::new(dir.path())).unwrap();
    assert!(history.is_empty());
}
