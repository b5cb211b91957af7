//! Bramble Store - durable client-side list stores.
//!
//! Two stores back the storefront client: the shopping cart and the
//! recently-viewed history. Both are ordered lists of product snapshots,
//! deduplicated by product ID, mirrored to durable storage on every mutation
//! and rehydrated when the store is opened.
//!
//! # Architecture
//!
//! State transitions are pure functions over the in-memory list; each store
//! applies the transition and then persists the full snapshot through a
//! [`StorageBackend`]. The backend is the only seam: tests use
//! [`MemoryBackend`], the CLI uses [`FileBackend`].
//!
//! List mutations themselves cannot fail - mutating an absent ID is a silent
//! no-op - so the only error a mutation surfaces is a storage write failure.
//!
//! # Modules
//!
//! - [`storage`] - the durable key-value seam and its backends
//! - [`cart`] - quantity-tracked, uncapped, deduplicated cart
//! - [`recent`] - capped, most-recent-first viewing history
//! - [`keys`] - the well-known storage keys

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod keys;
pub mod recent;
mod snapshot;
pub mod storage;

pub use cart::{CartLine, CartStore};
pub use recent::{RECENTLY_VIEWED_CAP, RecentlyViewedEntry, RecentlyViewedStore};
pub use storage::{FileBackend, MemoryBackend, StorageBackend, StorageError};
