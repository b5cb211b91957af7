//! The `{ "items": [...] }` snapshot codec shared by both stores.
//!
//! Snapshots are versionless JSON. On rehydration a missing key yields an
//! empty list, and a value that fails to decode is logged and discarded so
//! the store starts empty instead of propagating garbage into application
//! state. A half-written or foreign value costs the user a local cache, not
//! a working client.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::storage::{StorageBackend, StorageError};

#[derive(Debug, serde::Deserialize)]
struct Snapshot<T> {
    items: Vec<T>,
}

#[derive(Debug, Serialize)]
struct SnapshotRef<'a, T> {
    items: &'a [T],
}

/// Rehydrate the item list stored under `key`.
///
/// # Errors
///
/// Returns [`StorageError`] only if the backend itself fails; a decodable
/// read always succeeds, and an undecodable one resets to empty.
pub(crate) fn load<T, B>(backend: &B, key: &str) -> Result<Vec<T>, StorageError>
where
    T: DeserializeOwned,
    B: StorageBackend,
{
    let Some(raw) = backend.read(key)? else {
        return Ok(Vec::new());
    };

    match serde_json::from_str::<Snapshot<T>>(&raw) {
        Ok(snapshot) => Ok(snapshot.items),
        Err(e) => {
            tracing::warn!(key, error = %e, "discarding corrupt snapshot, starting empty");
            Ok(Vec::new())
        }
    }
}

/// Serialize `items` and write the snapshot under `key`.
///
/// # Errors
///
/// Returns [`StorageError`] if encoding or the backend write fails.
pub(crate) fn persist<T, B>(backend: &mut B, key: &str, items: &[T]) -> Result<(), StorageError>
where
    T: Serialize,
    B: StorageBackend,
{
    let encoded = serde_json::to_string(&SnapshotRef { items })?;
    backend.write(key, &encoded)
}
