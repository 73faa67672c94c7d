//! Change-notification bus.
//!
//! Two payload-less signals, one per collection. Views subscribe on mount,
//! unsubscribe on unmount, and re-query the relevant store when notified -
//! by the time a signal fires, the backing-store write behind it has
//! already committed, so a fresh read always observes the new state.
//!
//! The registry is an explicit per-signal list of callbacks; fan-out runs
//! in subscription order. Emission snapshots the list before invoking it,
//! so a callback may subscribe or unsubscribe (even itself) without
//! deadlocking; registration changes made mid-fan-out take effect from the
//! next emission.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::debug;

/// Named, payload-less notification of a collection mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signal {
    /// The cart collection was (possibly) mutated.
    CartChanged,
    /// The wishlist collection was (possibly) mutated.
    WishlistChanged,
}

impl Signal {
    const fn name(self) -> &'static str {
        match self {
            Self::CartChanged => "cart-changed",
            Self::WishlistChanged => "wishlist-changed",
        }
    }
}

/// Handle returned by [`ChangeBus::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

type Callback = Arc<dyn Fn() + Send + Sync>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    cart: Vec<(u64, Callback)>,
    wishlist: Vec<(u64, Callback)>,
}

impl Registry {
    fn subscribers(&mut self, signal: Signal) -> &mut Vec<(u64, Callback)> {
        match signal {
            Signal::CartChanged => &mut self.cart,
            Signal::WishlistChanged => &mut self.wishlist,
        }
    }
}

/// Process-wide publish point for collection change signals.
///
/// Cheap to clone; clones share one registry.
#[derive(Clone, Default)]
pub struct ChangeBus {
    registry: Arc<Mutex<Registry>>,
}

impl ChangeBus {
    /// Create a bus with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn registry(&self) -> MutexGuard<'_, Registry> {
        self.registry.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register `callback` for `signal`. Callbacks run in subscription
    /// order on every emission until unsubscribed.
    pub fn subscribe(
        &self,
        signal: Signal,
        callback: impl Fn() + Send + Sync + 'static,
    ) -> SubscriptionId {
        let mut registry = self.registry();
        registry.next_id += 1;
        let id = registry.next_id;
        registry.subscribers(signal).push((id, Arc::new(callback)));
        SubscriptionId(id)
    }

    /// Drop the subscription, if it is still registered. Call on view
    /// unmount so the registry does not retain callbacks into dead views.
    pub fn unsubscribe(&self, signal: Signal, id: SubscriptionId) {
        self.registry()
            .subscribers(signal)
            .retain(|(sub_id, _)| *sub_id != id.0);
    }

    /// Invoke every current subscriber of `signal`, in subscription order.
    pub fn emit(&self, signal: Signal) {
        let callbacks: Vec<Callback> = self
            .registry()
            .subscribers(signal)
            .iter()
            .map(|(_, callback)| Arc::clone(callback))
            .collect();

        debug!(
            signal = signal.name(),
            subscribers = callbacks.len(),
            "emitting change signal"
        );

        for callback in callbacks {
            callback();
        }
    }

    /// Number of live subscriptions for `signal`.
    #[must_use]
    pub fn subscriber_count(&self, signal: Signal) -> usize {
        self.registry().subscribers(signal).len()
    }
}
