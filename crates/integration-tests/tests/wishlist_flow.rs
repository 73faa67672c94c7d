//! Integration tests for the wishlist store.

use std::sync::Arc;

use bozor_core::ProductId;
use bozor_integration_tests::{count_signals, sample_product, signal_count};
use bozor_storefront::{ChangeBus, MemoryStore, Signal, WishlistStore};

fn wishlist_with_bus() -> (WishlistStore, ChangeBus) {
    let bus = ChangeBus::new();
    let wishlist = WishlistStore::new(Arc::new(MemoryStore::new()), bus.clone());
    (wishlist, bus)
}

#[test]
fn toggle_twice_returns_true_then_false() {
    let (wishlist, _bus) = wishlist_with_bus();
    let p = sample_product(1);

    assert!(wishlist.toggle(&p));
    assert_eq!(wishlist.count(), 1);
    assert!(wishlist.is_liked(p.id));

    assert!(!wishlist.toggle(&p));
    assert_eq!(wishlist.count(), 0);
    assert!(!wishlist.is_liked(p.id));
}

#[test]
fn add_on_liked_product_does_not_re_signal() {
    let (wishlist, bus) = wishlist_with_bus();
    let p = sample_product(1);
    let signals = count_signals(&bus, Signal::WishlistChanged);

    wishlist.add(&p);
    assert_eq!(signal_count(&signals), 1);

    // Already liked: true no-op, no signal.
    wishlist.add(&p);
    assert_eq!(signal_count(&signals), 1);
    assert_eq!(wishlist.count(), 1);
}

#[test]
fn remove_signals_even_when_nothing_matched() {
    let (wishlist, bus) = wishlist_with_bus();
    let signals = count_signals(&bus, Signal::WishlistChanged);

    wishlist.remove(ProductId::new(9));

    assert_eq!(signal_count(&signals), 1);
    assert!(wishlist.all().is_empty());
}

#[test]
fn clear_on_empty_wishlist_still_signals() {
    let (wishlist, bus) = wishlist_with_bus();
    let signals = count_signals(&bus, Signal::WishlistChanged);

    wishlist.clear();

    assert!(wishlist.all().is_empty());
    assert_eq!(signal_count(&signals), 1);
}

#[test]
fn membership_is_a_set_over_ids_in_like_order() {
    let (wishlist, _bus) = wishlist_with_bus();

    for id in [4, 1, 3, 1, 4] {
        wishlist.add(&sample_product(id));
    }

    let ids: Vec<i64> = wishlist.all().iter().map(|e| e.id.get()).collect();
    assert_eq!(ids, vec![4, 1, 3]);
}

#[test]
fn cart_and_wishlist_collections_are_independent() {
    let backing = Arc::new(MemoryStore::new());
    let bus = ChangeBus::new();
    let cart = bozor_storefront::CartStore::new(
        Arc::clone(&backing) as Arc<dyn bozor_storefront::KeyValueStore>,
        bus.clone(),
    );
    let wishlist = WishlistStore::new(backing, bus);

    let p = sample_product(1);
    cart.add(&p, 2);
    wishlist.add(&p);

    // Same product can live in both; clearing one leaves the other alone.
    cart.clear();
    assert_eq!(cart.count(), 0);
    assert!(wishlist.is_liked(p.id));
    assert_eq!(wishlist.count(), 1);
}
