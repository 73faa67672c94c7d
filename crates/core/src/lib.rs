//! Bozor Core - Shared domain types.
//!
//! This crate provides the catalog and collection types used across the
//! Bozor components:
//! - `storefront` - client-side storefront state (cart, wishlist, catalog)
//! - `cli` - command-line front end driving the storefront state
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no HTTP
//! clients. Cart and wishlist entries are immutable-at-capture snapshots of
//! catalog products: once an entry is stored, later catalog changes (price
//! or stock drift) are not reflected in it.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
