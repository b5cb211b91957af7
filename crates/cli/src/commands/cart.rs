//! Cart management commands.
//!
//! # Usage
//!
//! ```bash
//! # Add one unit of a product (repeat to increase quantity)
//! bramble cart add --id prod-1 --title "Wild Blackberry Jam" --price 12.50
//!
//! # Adjust quantities
//! bramble cart increment --id prod-1
//! bramble cart decrement --id prod-1
//!
//! # Inspect and reset
//! bramble cart show
//! bramble cart clear
//! ```

use bramble_core::ProductId;
use bramble_store::{CartStore, FileBackend};
use tracing::info;

use super::{CommandError, product_from_args};
use crate::config::CliConfig;

fn open(config: &CliConfig) -> Result<CartStore<FileBackend>, CommandError> {
    Ok(CartStore::open(FileBackend::new(&config.data_dir))?)
}

/// Add one unit of a product to the cart.
pub fn add(
    config: &CliConfig,
    id: &str,
    title: &str,
    price: &str,
    handle: Option<String>,
    image_url: Option<String>,
) -> Result<(), CommandError> {
    let product = product_from_args(id, title, price, handle, image_url)?;
    let mut cart = open(config)?;
    cart.add(product)?;

    info!(
        id,
        total_quantity = cart.total_quantity(),
        subtotal = %cart.subtotal(),
        "added to cart"
    );
    Ok(())
}

/// Increment the quantity of a cart line.
pub fn increment(config: &CliConfig, id: &str) -> Result<(), CommandError> {
    let mut cart = open(config)?;
    cart.increment(&ProductId::new(id))?;
    info!(id, total_quantity = cart.total_quantity(), "incremented");
    Ok(())
}

/// Decrement the quantity of a cart line, removing it at zero.
pub fn decrement(config: &CliConfig, id: &str) -> Result<(), CommandError> {
    let mut cart = open(config)?;
    cart.decrement(&ProductId::new(id))?;
    info!(id, total_quantity = cart.total_quantity(), "decremented");
    Ok(())
}

/// Remove a cart line entirely.
pub fn remove(config: &CliConfig, id: &str) -> Result<(), CommandError> {
    let mut cart = open(config)?;
    cart.remove(&ProductId::new(id))?;
    info!(id, total_quantity = cart.total_quantity(), "removed");
    Ok(())
}

/// Log the cart contents and totals.
pub fn show(config: &CliConfig) -> Result<(), CommandError> {
    let cart = open(config)?;

    if cart.is_empty() {
        info!("cart is empty");
        return Ok(());
    }

    for line in cart.lines() {
        info!(
            id = %line.id(),
            title = %line.product.title,
            quantity = line.quantity,
            unit_price = %line.product.price,
            line_total = %line.line_total(),
            "cart line"
        );
    }
    info!(
        lines = cart.lines().len(),
        total_quantity = cart.total_quantity(),
        subtotal = %cart.subtotal(),
        "cart totals"
    );
    Ok(())
}

/// Empty the cart.
pub fn clear(config: &CliConfig) -> Result<(), CommandError> {
    let mut cart = open(config)?;
    cart.clear()?;
    info!("cart cleared");
    Ok(())
}
