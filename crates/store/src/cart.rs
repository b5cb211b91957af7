//! Durable shopping cart.
//!
//! The cart is an ordered, uncapped list of lines, one per product ID.
//! Adding an already-carted product increments its quantity instead of
//! appending a duplicate line; a line whose quantity would reach zero is
//! removed in the same operation, so `quantity >= 1` holds for every line
//! observable between operations.
//!
//! State transitions are the pure `apply_*` functions; [`CartStore`] applies
//! a transition and then persists the full snapshot. Mutating an absent
//! product ID is a silent no-op, never an error.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use bramble_core::{ProductId, ProductSnapshot};

use crate::keys;
use crate::snapshot;
use crate::storage::{StorageBackend, StorageError};

/// One cart line: a product snapshot and how many units of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// The carted product, captured at add time.
    pub product: ProductSnapshot,
    /// Units of this product; always >= 1.
    pub quantity: u32,
}

impl CartLine {
    /// The product ID this line is keyed by.
    #[must_use]
    pub const fn id(&self) -> &ProductId {
        &self.product.id
    }

    /// Price of this line (`unit price x quantity`).
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.product.price.line_total(self.quantity)
    }
}

// =============================================================================
// Pure state transitions
// =============================================================================

fn apply_add(lines: &mut Vec<CartLine>, product: ProductSnapshot) {
    if let Some(line) = lines.iter_mut().find(|l| *l.id() == product.id) {
        line.quantity = line.quantity.saturating_add(1);
    } else {
        lines.push(CartLine {
            product,
            quantity: 1,
        });
    }
}

fn apply_increment(lines: &mut [CartLine], id: &ProductId) {
    if let Some(line) = lines.iter_mut().find(|l| l.id() == id) {
        line.quantity = line.quantity.saturating_add(1);
    }
}

fn apply_decrement(lines: &mut Vec<CartLine>, id: &ProductId) {
    if let Some(pos) = lines.iter().position(|l| l.id() == id) {
        match lines.get_mut(pos) {
            Some(line) if line.quantity > 1 => line.quantity -= 1,
            // A line never survives at quantity zero
            _ => {
                lines.remove(pos);
            }
        }
    }
}

fn apply_remove(lines: &mut Vec<CartLine>, id: &ProductId) {
    lines.retain(|l| l.id() != id);
}

// =============================================================================
// CartStore
// =============================================================================

/// The durable shopping cart.
///
/// Opened from a [`StorageBackend`], persisted back through it on every
/// mutation. Reads are pure and never touch storage.
#[derive(Debug)]
pub struct CartStore<B: StorageBackend> {
    backend: B,
    lines: Vec<CartLine>,
}

impl<B: StorageBackend> CartStore<B> {
    /// Open the cart, rehydrating any snapshot stored under the cart key.
    ///
    /// A missing snapshot yields an empty cart; a corrupt one is discarded
    /// with a warning and the cart starts empty.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend cannot be read.
    pub fn open(backend: B) -> Result<Self, StorageError> {
        let lines = snapshot::load(&backend, keys::CART)?;
        Ok(Self { backend, lines })
    }

    /// Add one unit of `product`: increments the existing line's quantity,
    /// or appends a new line with quantity 1.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if persisting the updated snapshot fails.
    pub fn add(&mut self, product: ProductSnapshot) -> Result<(), StorageError> {
        apply_add(&mut self.lines, product);
        self.persist()
    }

    /// Increment the quantity of the line for `id`. No-op if absent.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if persisting the updated snapshot fails.
    pub fn increment(&mut self, id: &ProductId) -> Result<(), StorageError> {
        apply_increment(&mut self.lines, id);
        self.persist()
    }

    /// Decrement the quantity of the line for `id`, removing the line if it
    /// reaches zero. No-op if absent.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if persisting the updated snapshot fails.
    pub fn decrement(&mut self, id: &ProductId) -> Result<(), StorageError> {
        apply_decrement(&mut self.lines, id);
        self.persist()
    }

    /// Remove the line for `id`. No-op if absent.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if persisting the updated snapshot fails.
    pub fn remove(&mut self, id: &ProductId) -> Result<(), StorageError> {
        apply_remove(&mut self.lines, id);
        self.persist()
    }

    /// Empty the cart.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if persisting the updated snapshot fails.
    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.lines.clear();
        self.persist()
    }

    /// The cart lines, in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total units across all lines.
    #[must_use]
    pub fn total_quantity(&self) -> u32 {
        self.lines
            .iter()
            .fold(0u32, |acc, l| acc.saturating_add(l.quantity))
    }

    /// Sum of `unit price x quantity` over all lines.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    fn persist(&mut self) -> Result<(), StorageError> {
        snapshot::persist(&mut self.backend, keys::CART, &self.lines)
    }
}
