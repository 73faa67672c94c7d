//! Integration tests for durability and storage-fault behavior.

use std::sync::Arc;

use bozor_core::ProductId;
use bozor_integration_tests::{BrokenStore, count_signals, sample_product, signal_count};
use bozor_storefront::{
    CartStore, ChangeBus, FileStore, KeyValueStore, MemoryStore, Signal, WishlistStore,
};

fn file_cart(dir: &std::path::Path) -> CartStore {
    let backing: Arc<dyn KeyValueStore> = Arc::new(FileStore::open(dir).expect("open store"));
    CartStore::new(backing, ChangeBus::new())
}

// =============================================================================
// Durability
// =============================================================================

#[test]
fn cart_survives_a_reload() {
    let dir = tempfile::tempdir().expect("tempdir");
    let p = sample_product(1);

    {
        let cart = file_cart(dir.path());
        cart.add(&p, 2);
        cart.add(&sample_product(2), 1);
    }

    // A "page reload": fresh stores over the same directory.
    let cart = file_cart(dir.path());
    let items = cart.items();
    assert_eq!(items.len(), 2);
    assert_eq!(cart.quantity(p.id), 2);
    assert_eq!(cart.count(), 3);
}

#[test]
fn collections_round_trip_losslessly() {
    let dir = tempfile::tempdir().expect("tempdir");

    let written = {
        let cart = file_cart(dir.path());
        cart.add(&sample_product(3), 2);
        cart.add(&sample_product(1), 7);
        cart.add(&sample_product(2), 1);
        cart.items()
    };

    let read = file_cart(dir.path()).items();
    assert_eq!(read, written, "same entries, same order, same quantities");
}

#[test]
fn wishlist_and_cart_persist_under_separate_keys() {
    let dir = tempfile::tempdir().expect("tempdir");
    let backing: Arc<dyn KeyValueStore> =
        Arc::new(FileStore::open(dir.path()).expect("open store"));
    let bus = ChangeBus::new();
    let cart = CartStore::new(Arc::clone(&backing), bus.clone());
    let wishlist = WishlistStore::new(Arc::clone(&backing), bus);

    cart.add(&sample_product(1), 1);
    wishlist.add(&sample_product(2));

    assert!(backing.get("cart-items").expect("get").is_some());
    assert!(backing.get("liked-products").expect("get").is_some());

    cart.clear();
    assert!(backing.get("cart-items").expect("get").is_none());
    assert!(backing.get("liked-products").expect("get").is_some());
}

// =============================================================================
// Corrupt state recovery
// =============================================================================

#[test]
fn corrupt_payload_reads_as_empty_and_recovers_on_next_write() {
    let backing = Arc::new(MemoryStore::new());
    backing
        .set("cart-items", "definitely { not json")
        .expect("seed corrupt payload");

    let cart = CartStore::new(
        Arc::clone(&backing) as Arc<dyn KeyValueStore>,
        ChangeBus::new(),
    );

    // Never fails the caller: corrupt state is an empty collection.
    assert!(cart.items().is_empty());
    assert_eq!(cart.count(), 0);

    // The next mutation overwrites the corrupt payload wholesale.
    cart.add(&sample_product(1), 1);
    assert_eq!(cart.items().len(), 1);
}

// =============================================================================
// Backing-store failures are swallowed
// =============================================================================

#[test]
fn failed_writes_leave_reads_at_pre_mutation_state() {
    let bus = ChangeBus::new();
    let cart = CartStore::new(Arc::new(BrokenStore), bus.clone());
    let signals = count_signals(&bus, Signal::CartChanged);

    // No panic, no error: the mutation is simply lost.
    cart.add(&sample_product(1), 2);
    assert!(cart.items().is_empty());

    // The signal still fires; subscribers re-read and see pre-mutation state.
    assert_eq!(signal_count(&signals), 1);

    cart.remove(ProductId::new(1));
    cart.clear();
    assert_eq!(signal_count(&signals), 3);
}

#[test]
fn failed_wishlist_writes_degrade_the_same_way() {
    let bus = ChangeBus::new();
    let wishlist = WishlistStore::new(Arc::new(BrokenStore), bus.clone());
    let signals = count_signals(&bus, Signal::WishlistChanged);

    let p = sample_product(1);
    assert!(wishlist.toggle(&p), "toggle still reports the attempted state");
    assert!(wishlist.all().is_empty());
    assert_eq!(signal_count(&signals), 1);
}
