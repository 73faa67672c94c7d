//! Bozor Storefront - client-side storefront state.
//!
//! This crate is the persistent state layer behind the Bozor catalog front
//! end. It tracks two independent collections - a shopping cart and a
//! wishlist - in a durable per-origin key-value store, keeps any number of
//! independently mounted views synchronized through a change-notification
//! bus, and derives monetary totals from the persisted entries.
//!
//! # Data flow
//!
//! ```text
//! UI action -> store mutator -> backing-store write -> change signal
//!           -> every subscribed view re-reads the store -> re-render
//! ```
//!
//! No view holds authoritative state: the backing store is the single
//! source of truth and every read deserializes it fresh. Signals carry no
//! payload, so by the time a subscriber runs, the write it reacts to has
//! already committed.
//!
//! # Execution model
//!
//! Store operations are synchronous and run to completion; each mutator
//! performs one read-modify-write cycle against the backing store,
//! serialized per store by an internal lock. Writers in other processes
//! sharing the same data directory are last-write-wins - an accepted
//! limitation, matching per-origin browser storage.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod bus;
pub mod cart;
pub mod catalog;
mod codec;
pub mod config;
pub mod error;
pub mod format;
pub mod state;
pub mod storage;
pub mod wishlist;

pub use bus::{ChangeBus, Signal, SubscriptionId};
pub use cart::CartStore;
pub use catalog::{CatalogClient, CatalogError};
pub use config::{ConfigError, StorefrontConfig};
pub use error::{AppError, Result};
pub use state::AppState;
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError};
pub use wishlist::WishlistStore;
