//! Well-known durable storage keys.
//!
//! One key per store instance; the value under each key is the store's full
//! `{ "items": [...] }` snapshot.

/// Key for the shopping cart snapshot.
pub const CART: &str = "cart";

/// Key for the recently-viewed history snapshot.
pub const RECENTLY_VIEWED: &str = "recently_viewed";
