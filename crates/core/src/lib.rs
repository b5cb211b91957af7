//! Bramble Core - Shared types and pure logic.
//!
//! This crate provides the common types used across all Bramble components:
//! - `store` - Durable client-side cart and recently-viewed stores
//! - `cli` - Command-line tools for inspecting and mutating local state
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no durable
//! storage access. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and prices, plus the
//!   product snapshot stored in cart lines and history entries
//! - [`pagination`] - Offset-cursor pagination over pre-materialized lists

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod pagination;
pub mod types;

pub use pagination::{DEFAULT_PAGE_SIZE, Page, PageError, paginate};
pub use types::*;
