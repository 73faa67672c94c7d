//! Shopping cart store.
//!
//! Owns the `cart-items` collection: product snapshots plus quantities, in
//! insertion order, with derived totals and savings. At most one entry
//! exists per product id, and an entry's quantity is at least 1 - a
//! quantity of zero removes the entry instead.
//!
//! Every mutator runs the same cycle: load the full collection, apply the
//! mutation in memory, persist the full collection, emit
//! [`Signal::CartChanged`]. The cycle is serialized by an internal lock so
//! in-process callers cannot interleave two read-modify-writes; writers in
//! other processes remain last-write-wins. Reads deserialize the backing
//! store fresh every time and take no lock.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use bozor_core::{CartEntry, Product, ProductId};
use rust_decimal::Decimal;

use crate::bus::{ChangeBus, Signal};
use crate::codec;
use crate::storage::KeyValueStore;

/// Backing-store key of the cart collection.
pub const CART_KEY: &str = "cart-items";

/// The cart collection and its derived totals.
///
/// Cheap to clone; clones share the same backing store and bus.
#[derive(Clone)]
pub struct CartStore {
    inner: Arc<CartStoreInner>,
}

struct CartStoreInner {
    backing: Arc<dyn KeyValueStore>,
    bus: ChangeBus,
    write_lock: Mutex<()>,
}

impl CartStore {
    /// Create a store over `backing`, signaling changes on `bus`.
    #[must_use]
    pub fn new(backing: Arc<dyn KeyValueStore>, bus: ChangeBus) -> Self {
        Self {
            inner: Arc::new(CartStoreInner {
                backing,
                bus,
                write_lock: Mutex::new(()),
            }),
        }
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// All cart entries, in insertion order. Fresh read, no side effects.
    #[must_use]
    pub fn items(&self) -> Vec<CartEntry> {
        self.load()
    }

    /// Sum of quantities across entries (the badge count).
    #[must_use]
    pub fn count(&self) -> u32 {
        self.load().iter().map(|entry| entry.quantity).sum()
    }

    /// Whether an entry for `id` exists.
    #[must_use]
    pub fn contains(&self, id: ProductId) -> bool {
        self.load().iter().any(|entry| entry.id == id)
    }

    /// Quantity stored for `id`, 0 when absent.
    #[must_use]
    pub fn quantity(&self, id: ProductId) -> u32 {
        self.load()
            .iter()
            .find(|entry| entry.id == id)
            .map_or(0, |entry| entry.quantity)
    }

    /// Discounted total over all entries.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.load().iter().map(CartEntry::line_total).sum()
    }

    /// Pre-discount total over all entries.
    ///
    /// # Panics
    ///
    /// Panics if any entry carries a discount of exactly 100 percent;
    /// callers must keep discounts below 100 for priced entries.
    #[must_use]
    pub fn original_total(&self) -> Decimal {
        self.load().iter().map(CartEntry::original_line_total).sum()
    }

    /// `original_total - total`; zero when nothing is discounted.
    ///
    /// # Panics
    ///
    /// As for [`Self::original_total`].
    #[must_use]
    pub fn savings(&self) -> Decimal {
        self.original_total() - self.total()
    }

    // =========================================================================
    // Mutators: load -> mutate -> persist -> notify
    // =========================================================================

    /// Add `quantity` units of `product`.
    ///
    /// Increments the existing entry when the product is already in the
    /// cart, appends a new entry otherwise. A zero quantity is ignored.
    /// The store does not clamp to stock - that is the caller's policy.
    pub fn add(&self, product: &Product, quantity: u32) {
        if quantity == 0 {
            return;
        }

        let _guard = self.write_guard();
        let mut entries = self.load();
        if let Some(entry) = entries.iter_mut().find(|entry| entry.id == product.id) {
            entry.quantity += quantity;
        } else {
            entries.push(CartEntry::new(product, quantity));
        }
        self.persist(&entries);
        self.notify();
    }

    /// Set the quantity for `id` exactly; 0 removes the entry.
    ///
    /// Never inserts: when `id` is absent the collection is unchanged. The
    /// collection is re-persisted and the change signal fires either way,
    /// so callers can rely on a refresh.
    pub fn set_quantity(&self, id: ProductId, quantity: u32) {
        let _guard = self.write_guard();
        let mut entries = self.load();
        if quantity == 0 {
            entries.retain(|entry| entry.id != id);
        } else if let Some(entry) = entries.iter_mut().find(|entry| entry.id == id) {
            entry.quantity = quantity;
        }
        self.persist(&entries);
        self.notify();
    }

    /// Remove the entry for `id`, if present. Signals unconditionally.
    pub fn remove(&self, id: ProductId) {
        let _guard = self.write_guard();
        let mut entries = self.load();
        entries.retain(|entry| entry.id != id);
        self.persist(&entries);
        self.notify();
    }

    /// Delete the whole collection. Signals unconditionally.
    pub fn clear(&self) {
        let _guard = self.write_guard();
        codec::remove_entries(self.inner.backing.as_ref(), CART_KEY);
        self.notify();
    }

    // =========================================================================
    // Internal read-modify-write steps
    // =========================================================================

    fn write_guard(&self) -> MutexGuard<'_, ()> {
        self.inner
            .write_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn load(&self) -> Vec<CartEntry> {
        codec::read_entries(self.inner.backing.as_ref(), CART_KEY)
    }

    /// Overwrite the persisted collection. An empty collection deletes the
    /// key, returning it to the never-written state.
    fn persist(&self, entries: &[CartEntry]) {
        if entries.is_empty() {
            codec::remove_entries(self.inner.backing.as_ref(), CART_KEY);
        } else {
            codec::write_entries(self.inner.backing.as_ref(), CART_KEY, entries);
        }
    }

    fn notify(&self) {
        self.inner.bus.emit(Signal::CartChanged);
    }
}
