//! Integration tests for the change-notification contract between stores
//! and independently mounted views.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use bozor_integration_tests::{count_signals, sample_product, signal_count};
use bozor_storefront::{AppState, MemoryStore, Signal, StorefrontConfig};

fn memory_state() -> AppState {
    let config = StorefrontConfig {
        catalog_base_url: url_for_tests(),
        data_dir: std::path::PathBuf::from("unused"),
    };
    AppState::with_backing(config, Arc::new(MemoryStore::new()))
}

fn url_for_tests() -> url::Url {
    url::Url::parse("https://catalog.invalid").expect("static test URL")
}

#[test]
fn every_subscriber_sees_every_emission() {
    let state = memory_state();

    let badge = count_signals(state.bus(), Signal::CartChanged);
    let page = count_signals(state.bus(), Signal::CartChanged);
    let drawer = count_signals(state.bus(), Signal::CartChanged);

    state.cart().add(&sample_product(1), 1);
    state.cart().remove(sample_product(1).id);

    for counter in [&badge, &page, &drawer] {
        assert_eq!(signal_count(counter), 2);
    }
}

#[test]
fn unmounted_view_stops_receiving() {
    let state = memory_state();
    let hits = Arc::new(AtomicU32::new(0));

    let subscription = {
        let hits = Arc::clone(&hits);
        state.bus().subscribe(Signal::WishlistChanged, move || {
            hits.fetch_add(1, Ordering::SeqCst);
        })
    };

    state.wishlist().add(&sample_product(1));
    assert_eq!(hits.load(Ordering::SeqCst), 1);

    // Unmount: the callback must not be retained.
    state.bus().unsubscribe(Signal::WishlistChanged, subscription);
    state.wishlist().clear();

    assert_eq!(hits.load(Ordering::SeqCst), 1);
    assert_eq!(state.bus().subscriber_count(Signal::WishlistChanged), 0);
}

#[test]
fn cart_mutations_do_not_wake_wishlist_views() {
    let state = memory_state();

    let cart_views = count_signals(state.bus(), Signal::CartChanged);
    let wishlist_views = count_signals(state.bus(), Signal::WishlistChanged);

    state.cart().add(&sample_product(1), 1);
    state.cart().clear();

    assert_eq!(signal_count(&cart_views), 2);
    assert_eq!(signal_count(&wishlist_views), 0);
}

#[test]
fn subscriber_re_reads_committed_state() {
    let state = memory_state();

    // A badge view: re-queries the store on every signal, holding no state
    // of its own beyond the rendered count.
    let rendered = Arc::new(Mutex::new(0_u32));
    {
        let cart = state.cart().clone();
        let rendered = Arc::clone(&rendered);
        state.bus().subscribe(Signal::CartChanged, move || {
            *rendered.lock().expect("rendered") = cart.count();
        });
    }

    state.cart().add(&sample_product(1), 3);
    assert_eq!(*rendered.lock().expect("rendered"), 3);

    state.cart().set_quantity(sample_product(1).id, 1);
    assert_eq!(*rendered.lock().expect("rendered"), 1);

    state.cart().clear();
    assert_eq!(*rendered.lock().expect("rendered"), 0);
}

#[test]
fn wishlist_toggle_drives_both_directions() {
    let state = memory_state();
    let signals = count_signals(state.bus(), Signal::WishlistChanged);
    let p = sample_product(5);

    assert!(state.wishlist().toggle(&p));
    assert!(!state.wishlist().toggle(&p));

    // One signal per real mutation, both directions.
    assert_eq!(signal_count(&signals), 2);
}
