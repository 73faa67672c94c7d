//! Application state shared across views.
//!
//! The dependency-injection root: one backing store, one change bus, the
//! two collection stores over them, and the catalog client. Views receive
//! a clone of this instead of reaching for ambient globals, which is also
//! what lets tests swap the durable backing store for an in-memory one.

use std::sync::Arc;

use crate::bus::ChangeBus;
use crate::cart::CartStore;
use crate::catalog::CatalogClient;
use crate::config::StorefrontConfig;
use crate::error::Result;
use crate::storage::{FileStore, KeyValueStore};
use crate::wishlist::WishlistStore;

/// Application state shared across all views.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// persistent stores, the change bus, and the catalog client.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    bus: ChangeBus,
    cart: CartStore,
    wishlist: WishlistStore,
    catalog: CatalogClient,
}

impl AppState {
    /// Create application state over the durable file store at
    /// `config.data_dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be created.
    pub fn new(config: StorefrontConfig) -> Result<Self> {
        let backing: Arc<dyn KeyValueStore> = Arc::new(FileStore::open(&config.data_dir)?);
        Ok(Self::with_backing(config, backing))
    }

    /// Create application state over an injected backing store.
    ///
    /// Tests use this with a fresh `MemoryStore` per test.
    #[must_use]
    pub fn with_backing(config: StorefrontConfig, backing: Arc<dyn KeyValueStore>) -> Self {
        let bus = ChangeBus::new();
        let cart = CartStore::new(Arc::clone(&backing), bus.clone());
        let wishlist = WishlistStore::new(Arc::clone(&backing), bus.clone());
        let catalog = CatalogClient::new(&config.catalog_base_url);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                bus,
                cart,
                wishlist,
                catalog,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the change-notification bus.
    #[must_use]
    pub fn bus(&self) -> &ChangeBus {
        &self.inner.bus
    }

    /// Get a reference to the cart store.
    #[must_use]
    pub fn cart(&self) -> &CartStore {
        &self.inner.cart
    }

    /// Get a reference to the wishlist store.
    #[must_use]
    pub fn wishlist(&self) -> &WishlistStore {
        &self.inner.wishlist
    }

    /// Get a reference to the catalog client.
    #[must_use]
    pub fn catalog(&self) -> &CatalogClient {
        &self.inner.catalog
    }
}
