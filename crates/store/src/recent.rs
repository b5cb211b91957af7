//! Durable recently-viewed history.
//!
//! A capped, most-recent-first list of product snapshots. Recording a
//! product that is already present moves it to the front (dedup-and-promote)
//! instead of duplicating it; anything past the cap falls off the end.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use bramble_core::{ProductId, ProductSnapshot};

use crate::keys;
use crate::snapshot;
use crate::storage::{StorageBackend, StorageError};

/// Maximum number of history entries retained.
pub const RECENTLY_VIEWED_CAP: usize = 20;

/// One history entry: the viewed product and when it was last viewed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentlyViewedEntry {
    /// The viewed product, captured at view time.
    pub product: ProductSnapshot,
    /// Last view time; refreshed when a repeat view promotes the entry.
    pub viewed_at: DateTime<Utc>,
}

impl RecentlyViewedEntry {
    /// The product ID this entry is keyed by.
    #[must_use]
    pub const fn id(&self) -> &ProductId {
        &self.product.id
    }
}

fn apply_record(
    entries: &mut Vec<RecentlyViewedEntry>,
    product: ProductSnapshot,
    viewed_at: DateTime<Utc>,
) {
    entries.retain(|e| *e.id() != product.id);
    entries.insert(0, RecentlyViewedEntry { product, viewed_at });
    entries.truncate(RECENTLY_VIEWED_CAP);
}

/// The durable recently-viewed store.
///
/// Opened from a [`StorageBackend`], persisted back through it on every
/// mutation. Ordering is by list position (front = most recent), not by
/// comparing timestamps.
#[derive(Debug)]
pub struct RecentlyViewedStore<B: StorageBackend> {
    backend: B,
    entries: Vec<RecentlyViewedEntry>,
}

impl<B: StorageBackend> RecentlyViewedStore<B> {
    /// Open the history, rehydrating any snapshot stored under the
    /// recently-viewed key.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend cannot be read.
    pub fn open(backend: B) -> Result<Self, StorageError> {
        let entries = snapshot::load(&backend, keys::RECENTLY_VIEWED)?;
        Ok(Self { backend, entries })
    }

    /// Record a view of `product` at the current time.
    ///
    /// An existing entry for the same product is promoted to the front with
    /// a fresh timestamp; the list is then truncated to
    /// [`RECENTLY_VIEWED_CAP`].
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if persisting the updated snapshot fails.
    pub fn record(&mut self, product: ProductSnapshot) -> Result<(), StorageError> {
        self.record_at(product, Utc::now())
    }

    /// Record a view at an explicit time. Exists so tests and importers can
    /// control the timestamp; ordering semantics are identical to
    /// [`record`](Self::record).
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if persisting the updated snapshot fails.
    pub fn record_at(
        &mut self,
        product: ProductSnapshot,
        viewed_at: DateTime<Utc>,
    ) -> Result<(), StorageError> {
        apply_record(&mut self.entries, product, viewed_at);
        self.persist()
    }

    /// Remove the entry for `id`. No-op if absent.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if persisting the updated snapshot fails.
    pub fn remove(&mut self, id: &ProductId) -> Result<(), StorageError> {
        self.entries.retain(|e| e.id() != id);
        self.persist()
    }

    /// Empty the history.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if persisting the updated snapshot fails.
    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.entries.clear();
        self.persist()
    }

    /// The history entries, most recent first.
    #[must_use]
    pub fn items(&self) -> &[RecentlyViewedEntry] {
        &self.entries
    }

    /// Number of history entries (never exceeds [`RECENTLY_VIEWED_CAP`]).
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the history is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn persist(&mut self) -> Result<(), StorageError> {
        snapshot::persist(&mut self.backend, keys::RECENTLY_VIEWED, &self.entries)
    }
}
