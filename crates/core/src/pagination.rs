//! Offset-cursor pagination over pre-materialized lists.
//!
//! Listings here are small and refetched in full, so the cursor is simply the
//! start offset into the source slice, serialized as a decimal string. That
//! makes pages deterministic and replayable against the same source, but not
//! stable if the source mutates between calls - callers that need stability
//! re-materialize the list first.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Page size used when the caller does not specify one.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Errors from [`paginate`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PageError {
    /// The cursor did not parse as a non-negative integer offset.
    #[error("invalid cursor: {0:?}")]
    InvalidCursor(String),

    /// The page size was zero.
    #[error("page size must be at least 1")]
    InvalidLimit,
}

/// One page of a paginated listing.
///
/// Serialized camelCase (`hasMore`, `nextCursor`) to match the wire shape
/// consumed by infinite-scroll clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// Items on this page, in source order.
    pub data: Vec<T>,
    /// Whether more items exist past this page.
    pub has_more: bool,
    /// Cursor for the next page; absent on the final page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<String>,
    /// Total number of items in the source, independent of the cursor.
    pub total: usize,
}

/// Produce one page of `items` starting at the offset encoded by `cursor`.
///
/// An absent cursor means offset 0. An offset at or past the end of `items`
/// yields an empty page with `has_more == false` rather than an error, so a
/// client replaying a stale cursor against a shrunken source terminates
/// cleanly.
///
/// # Errors
///
/// Returns [`PageError::InvalidCursor`] if `cursor` is present but does not
/// parse as a non-negative integer, and [`PageError::InvalidLimit`] if
/// `limit` is zero.
pub fn paginate<T: Clone>(
    items: &[T],
    cursor: Option<&str>,
    limit: usize,
) -> Result<Page<T>, PageError> {
    if limit == 0 {
        return Err(PageError::InvalidLimit);
    }

    let offset = match cursor {
        Some(raw) => raw
            .parse::<usize>()
            .map_err(|_| PageError::InvalidCursor(raw.to_owned()))?,
        None => 0,
    };

    let end = offset.saturating_add(limit).min(items.len());
    let data = items.get(offset..end).unwrap_or_default().to_vec();
    let has_more = end < items.len();

    Ok(Page {
        data,
        has_more,
        next_cursor: has_more.then(|| end.to_string()),
        total: items.len(),
    })
}
