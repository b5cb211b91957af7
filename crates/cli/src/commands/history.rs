//! Recently-viewed history commands.
//!
//! # Usage
//!
//! ```bash
//! # Record a product view (promotes to front if already present)
//! bramble history record --id prod-1 --title "Wild Blackberry Jam" --price 12.50
//!
//! # Page through the history, chaining cursors
//! bramble history show
//! bramble history show --cursor 10 --limit 10
//!
//! # Reset
//! bramble history clear
//! ```

use bramble_core::{ProductId, paginate};
use bramble_store::{FileBackend, RecentlyViewedStore};
use tracing::info;

use super::{CommandError, product_from_args};
use crate::config::CliConfig;

fn open(config: &CliConfig) -> Result<RecentlyViewedStore<FileBackend>, CommandError> {
    Ok(RecentlyViewedStore::open(FileBackend::new(
        &config.data_dir,
    ))?)
}

/// Record a product view.
pub fn record(
    config: &CliConfig,
    id: &str,
    title: &str,
    price: &str,
    handle: Option<String>,
    image_url: Option<String>,
) -> Result<(), CommandError> {
    let product = product_from_args(id, title, price, handle, image_url)?;
    let mut history = open(config)?;
    history.record(product)?;

    info!(id, entries = history.len(), "recorded view");
    Ok(())
}

/// Log one page of the history, most recent first.
pub fn show(config: &CliConfig, cursor: Option<&str>, limit: usize) -> Result<(), CommandError> {
    let history = open(config)?;
    let page = paginate(history.items(), cursor, limit)?;

    if page.data.is_empty() {
        info!(total = page.total, "no history entries on this page");
        return Ok(());
    }

    for entry in &page.data {
        info!(
            id = %entry.id(),
            title = %entry.product.title,
            viewed_at = %entry.viewed_at,
            "history entry"
        );
    }
    match &page.next_cursor {
        Some(next) => info!(
            shown = page.data.len(),
            total = page.total,
            next_cursor = %next,
            "more history available"
        ),
        None => info!(shown = page.data.len(), total = page.total, "end of history"),
    }
    Ok(())
}

/// Remove one history entry.
pub fn remove(config: &CliConfig, id: &str) -> Result<(), CommandError> {
    let mut history = open(config)?;
    history.remove(&ProductId::new(id))?;
    info!(id, entries = history.len(), "removed history entry");
    Ok(())
}

/// Empty the history.
pub fn clear(config: &CliConfig) -> Result<(), CommandError> {
    let mut history = open(config)?;
    history.clear()?;
    info!("history cleared");
    Ok(())
}
