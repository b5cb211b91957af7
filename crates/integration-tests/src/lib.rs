//! Integration tests for Bramble.
//!
//! The tests exercise the stores through a real [`bramble_store::FileBackend`]
//! rooted in a temporary directory, covering what unit tests cannot: state
//! surviving a store reopen, recovery from corrupt snapshot files, and
//! cursor-chained pagination over store contents.
//!
//! # Test Files
//!
//! - `cart_durability` - cart state across reopen, corruption recovery
//! - `history_durability` - history cap and ordering across reopen
//! - `pagination_flow` - chained cursors over materialized lists

#![cfg_attr(not(test), forbid(unsafe_code))]

use bramble_core::{CurrencyCode, Price, ProductId, ProductSnapshot};
use rust_decimal::Decimal;

/// Build a product snapshot with a deterministic handle/title and a price in
/// cents, for use across the test files.
#[must_use]
pub fn test_product(id: &str, price_cents: i64) -> ProductSnapshot {
    ProductSnapshot {
        id: ProductId::new(id),
        handle: format!("{id}-handle"),
        title: format!("Product {id}"),
        image_url: Some(format!("https://cdn.bramblegoods.shop/{id}.jpg")),
        price: Price::new(Decimal::new(price_cents, 2), CurrencyCode::USD),
    }
}
