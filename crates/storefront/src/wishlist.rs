//! Wishlist store.
//!
//! Owns the `liked-products` collection: a set of product snapshots keyed
//! by product id, kept in like order. Same read-modify-write discipline as
//! the cart store, with one asymmetry: `add` on an already-liked product is
//! a true no-op and does not re-signal, while `remove` signals whether or
//! not anything matched.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use bozor_core::{Product, ProductId, WishlistEntry};

use crate::bus::{ChangeBus, Signal};
use crate::codec;
use crate::storage::KeyValueStore;

/// Backing-store key of the wishlist collection.
pub const WISHLIST_KEY: &str = "liked-products";

/// The liked-products collection.
///
/// Cheap to clone; clones share the same backing store and bus.
#[derive(Clone)]
pub struct WishlistStore {
    inner: Arc<WishlistStoreInner>,
}

struct WishlistStoreInner {
    backing: Arc<dyn KeyValueStore>,
    bus: ChangeBus,
    write_lock: Mutex<()>,
}

impl WishlistStore {
    /// Create a store over `backing`, signaling changes on `bus`.
    #[must_use]
    pub fn new(backing: Arc<dyn KeyValueStore>, bus: ChangeBus) -> Self {
        Self {
            inner: Arc::new(WishlistStoreInner {
                backing,
                bus,
                write_lock: Mutex::new(()),
            }),
        }
    }

    /// All liked products, in like order. Fresh read, no side effects.
    #[must_use]
    pub fn all(&self) -> Vec<WishlistEntry> {
        self.load()
    }

    /// Number of liked products.
    #[must_use]
    pub fn count(&self) -> u32 {
        u32::try_from(self.load().len()).unwrap_or(u32::MAX)
    }

    /// Whether `id` is in the wishlist.
    #[must_use]
    pub fn is_liked(&self, id: ProductId) -> bool {
        self.load().iter().any(|entry| entry.id == id)
    }

    /// Like `product`. No-op without a signal when already liked.
    pub fn add(&self, product: &Product) {
        let _guard = self.write_guard();
        if self.insert(product) {
            self.notify();
        }
    }

    /// Unlike `id`, if liked. Signals unconditionally.
    pub fn remove(&self, id: ProductId) {
        let _guard = self.write_guard();
        self.delete(id);
        self.notify();
    }

    /// Flip the liked state of `product` and return the new state:
    /// `true` when it was just added, `false` when it was just removed.
    ///
    /// The membership check and the mutation happen under one lock
    /// acquisition, so no other in-process caller can interleave.
    pub fn toggle(&self, product: &Product) -> bool {
        let _guard = self.write_guard();
        if self.load().iter().any(|entry| entry.id == product.id) {
            self.delete(product.id);
            self.notify();
            false
        } else {
            self.insert(product);
            self.notify();
            true
        }
    }

    /// Delete the whole collection. Signals unconditionally.
    pub fn clear(&self) {
        let _guard = self.write_guard();
        codec::remove_entries(self.inner.backing.as_ref(), WISHLIST_KEY);
        self.notify();
    }

    // =========================================================================
    // Internal read-modify-write steps (callers hold the write lock)
    // =========================================================================

    fn write_guard(&self) -> MutexGuard<'_, ()> {
        self.inner
            .write_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn load(&self) -> Vec<WishlistEntry> {
        codec::read_entries(self.inner.backing.as_ref(), WISHLIST_KEY)
    }

    /// Append `product` unless already present; reports whether the
    /// collection changed.
    fn insert(&self, product: &Product) -> bool {
        let mut entries = self.load();
        if entries.iter().any(|entry| entry.id == product.id) {
            return false;
        }
        entries.push(WishlistEntry::from(product));
        self.persist(&entries);
        true
    }

    fn delete(&self, id: ProductId) {
        let mut entries = self.load();
        entries.retain(|entry| entry.id != id);
        self.persist(&entries);
    }

    /// Overwrite the persisted collection. An empty collection deletes the
    /// key, returning it to the never-written state.
    fn persist(&self, entries: &[WishlistEntry]) {
        if entries.is_empty() {
            codec::remove_entries(self.inner.backing.as_ref(), WISHLIST_KEY);
        } else {
            codec::write_entries(self.inner.backing.as_ref(), WISHLIST_KEY, entries);
        }
    }

    fn notify(&self) {
        self.inner.bus.emit(Signal::WishlistChanged);
    }
}
