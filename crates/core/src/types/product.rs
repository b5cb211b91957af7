//! Product snapshot stored in cart lines and history entries.
//!
//! The snapshot denormalizes the handful of catalog fields the client needs
//! to render a line without refetching: handle, title, image, unit price.
//! It is a point-in-time capture, not a live view of the catalog.

use serde::{Deserialize, Serialize};

use crate::types::{Price, ProductId};

/// A denormalized capture of a catalog product.
///
/// Identity is [`ProductId`]; no other field carries a uniqueness
/// constraint. Two snapshots of the same product may disagree on title or
/// price if the catalog changed between captures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSnapshot {
    /// Unique product identifier from the remote catalog.
    pub id: ProductId,
    /// URL-safe handle (e.g., "wild-blackberry-jam").
    pub handle: String,
    /// Display title.
    pub title: String,
    /// Primary image URL, if the product has one.
    pub image_url: Option<String>,
    /// Unit price at capture time.
    pub price: Price,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::CurrencyCode;
    use rust_decimal::Decimal;

    fn snapshot(id: &str) -> ProductSnapshot {
        ProductSnapshot {
            id: ProductId::new(id),
            handle: "wild-blackberry-jam".to_owned(),
            title: "Wild Blackberry Jam".to_owned(),
            image_url: Some("https://cdn.bramblegoods.shop/jam.jpg".to_owned()),
            price: Price::new(Decimal::new(1250, 2), CurrencyCode::USD),
        }
    }

    #[test]
    fn test_snapshot_json_round_trip() {
        let original = snapshot("prod-1");
        let json = serde_json::to_string(&original).unwrap();
        let back: ProductSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, original);
    }

    #[test]
    fn test_identity_is_the_id() {
        let a = snapshot("prod-1");
        let mut b = snapshot("prod-1");
        b.title = "Renamed Jam".to_owned();
        // Same identity even though other fields diverged
        assert_eq!(a.id, b.id);
        assert_ne!(a, b);
    }
}
