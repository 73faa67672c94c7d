//! Integration tests for Bozor.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p bozor-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_flow` - cart store invariants, totals, and scenarios
//! - `wishlist_flow` - wishlist set semantics and toggle behavior
//! - `signals` - change-notification fan-out and subscription lifecycle
//! - `persistence` - durable storage, corrupt-state recovery, failure modes
//!
//! None of the tests need the network or a real catalog: each one builds
//! its stores over a fresh in-memory (or temp-dir) backing store and feeds
//! them fixture products. This crate's library part holds those shared
//! fixtures.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use rust_decimal::Decimal;

use bozor_core::{Product, ProductId};
use bozor_storefront::{ChangeBus, KeyValueStore, Signal, StorageError};

/// A catalog product fixture with a sensible default shape.
#[must_use]
pub fn sample_product(id: i64) -> Product {
    product_with_price(id, 1_000, 0)
}

/// A catalog product fixture with explicit price and discount.
#[must_use]
pub fn product_with_price(id: i64, price: i64, discount: i64) -> Product {
    Product {
        id: ProductId::new(id),
        title: format!("product {id}"),
        description: format!("description of product {id}"),
        price: Decimal::from(price),
        discount_percentage: Decimal::from(discount),
        rating: 4.1,
        stock: 50,
        brand: "Acme".to_string(),
        category: "fixtures".to_string(),
        thumbnail: format!("https://cdn.example/{id}/thumb.jpg"),
        images: vec![format!("https://cdn.example/{id}/full.jpg")],
    }
}

/// Subscribe a counting callback to `signal`; the returned counter tracks
/// how many emissions reached it.
#[must_use]
pub fn count_signals(bus: &ChangeBus, signal: Signal) -> Arc<AtomicUsize> {
    let counter = Arc::new(AtomicUsize::new(0));
    let hits = Arc::clone(&counter);
    bus.subscribe(signal, move || {
        hits.fetch_add(1, Ordering::SeqCst);
    });
    counter
}

/// Current value of a [`count_signals`] counter.
#[must_use]
pub fn signal_count(counter: &AtomicUsize) -> usize {
    counter.load(Ordering::SeqCst)
}

/// A backing store whose writes and deletes always fail, for exercising
/// the swallow-and-degrade error policy. Reads answer from nothing.
#[derive(Debug, Default)]
pub struct BrokenStore;

impl KeyValueStore for BrokenStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(None)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Io(std::io::Error::other("disk full")))
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Io(std::io::Error::other("disk full")))
    }
}
