//! Newtype ID for type-safe product references.
//!
//! Catalog identities are opaque strings handed out by the remote catalog
//! API, so the wrapper is string-backed rather than numeric. Wrapping them
//! keeps a product ID from being confused with a handle or a storage key.

use serde::{Deserialize, Serialize};

/// A product's unique identifier.
///
/// Identity for cart lines and recently-viewed entries: two entries with the
/// same `ProductId` refer to the same product, regardless of any other field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Create a new product ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the underlying string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<ProductId> for String {
    fn from(id: ProductId) -> Self {
        id.0
    }
}
