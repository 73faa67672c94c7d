//! Remote product catalog client.
//!
//! Read-only JSON API serving product records by id, listing, or category.
//! Responses are cached with `moka` (5-minute TTL); the persistent stores
//! never call the catalog - only UI-layer code does, handing the fetched
//! snapshots to the stores.

mod cache;

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use serde::Deserialize;
use tracing::{debug, instrument};
use url::Url;

use bozor_core::{Product, ProductId};

use cache::{CacheKey, CacheValue};

/// Failure fetching from the catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The catalog has no product with this id.
    #[error("product {0} not found in catalog")]
    NotFound(ProductId),

    /// Transport or decoding failure.
    #[error("catalog request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The catalog answered with an unexpected status.
    #[error("catalog returned status {status}")]
    Status { status: u16 },
}

/// Page envelope around product listings (`{"products": [...]}`).
#[derive(Debug, Deserialize)]
struct ProductPage {
    products: Vec<Product>,
}

/// Client for the remote product catalog.
///
/// Products and listings are cached for 5 minutes.
#[derive(Clone)]
pub struct CatalogClient {
    inner: Arc<CatalogClientInner>,
}

struct CatalogClientInner {
    client: reqwest::Client,
    base_url: String,
    cache: Cache<CacheKey, CacheValue>,
}

impl CatalogClient {
    /// Create a client against the catalog at `base_url`.
    #[must_use]
    pub fn new(base_url: &Url) -> Self {
        let cache = Cache::builder()
            .max_capacity(1000)
            .time_to_live(Duration::from_secs(300))
            .build();

        Self {
            inner: Arc::new(CatalogClientInner {
                client: reqwest::Client::new(),
                base_url: base_url.as_str().trim_end_matches('/').to_owned(),
                cache,
            }),
        }
    }

    /// Fetch one product by id.
    ///
    /// # Errors
    ///
    /// [`CatalogError::NotFound`] when the catalog has no such product;
    /// [`CatalogError::Request`] / [`CatalogError::Status`] on transport
    /// or server failures.
    #[instrument(skip(self))]
    pub async fn product(&self, id: ProductId) -> Result<Product, CatalogError> {
        let key = CacheKey::Product(id);
        if let Some(CacheValue::Product(product)) = self.inner.cache.get(&key).await {
            debug!(%id, "catalog cache hit");
            return Ok(*product);
        }

        let url = self.endpoint(&format!("products/{id}"));
        let response = self.inner.client.get(&url).send().await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound(id));
        }
        let response = Self::check_status(response)?;

        let product: Product = response.json().await?;
        self.inner
            .cache
            .insert(key, CacheValue::Product(Box::new(product.clone())))
            .await;
        Ok(product)
    }

    /// Fetch the first `limit` products of the catalog listing.
    ///
    /// # Errors
    ///
    /// [`CatalogError::Request`] / [`CatalogError::Status`] on transport
    /// or server failures.
    #[instrument(skip(self))]
    pub async fn products(&self, limit: u32) -> Result<Vec<Product>, CatalogError> {
        let key = CacheKey::Products { limit };
        if let Some(CacheValue::Products(products)) = self.inner.cache.get(&key).await {
            debug!(limit, "catalog cache hit");
            return Ok(products);
        }

        let url = format!("{}?limit={limit}", self.endpoint("products"));
        let products = self.fetch_page(&url).await?;

        self.inner
            .cache
            .insert(key, CacheValue::Products(products.clone()))
            .await;
        Ok(products)
    }

    /// Fetch every product in `category`.
    ///
    /// An unknown category is not an error: the catalog answers it with an
    /// empty page.
    ///
    /// # Errors
    ///
    /// [`CatalogError::Request`] / [`CatalogError::Status`] on transport
    /// or server failures.
    #[instrument(skip(self))]
    pub async fn products_by_category(&self, category: &str) -> Result<Vec<Product>, CatalogError> {
        let key = CacheKey::Category(category.to_owned());
        if let Some(CacheValue::Products(products)) = self.inner.cache.get(&key).await {
            debug!(category, "catalog cache hit");
            return Ok(products);
        }

        let url = self.endpoint(&format!("products/category/{category}"));
        let products = self.fetch_page(&url).await?;

        self.inner
            .cache
            .insert(key, CacheValue::Products(products.clone()))
            .await;
        Ok(products)
    }

    async fn fetch_page(&self, url: &str) -> Result<Vec<Product>, CatalogError> {
        let response = self.inner.client.get(url).send().await?;
        let response = Self::check_status(response)?;
        let page: ProductPage = response.json().await?;
        Ok(page.products)
    }

    fn check_status(response: reqwest::Response) -> Result<reqwest::Response, CatalogError> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(CatalogError::Status {
                status: status.as_u16(),
            })
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.inner.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_envelope_parses() {
        let raw = r#"{
            "products": [
                {
                    "id": 1,
                    "title": "Mascara",
                    "description": "Lengthening mascara",
                    "price": 9.99,
                    "discountPercentage": 7.17,
                    "rating": 4.94,
                    "stock": 5,
                    "brand": "Essence",
                    "category": "beauty",
                    "thumbnail": "https://cdn.example/1/thumb.jpg",
                    "images": ["https://cdn.example/1/a.jpg"]
                }
            ],
            "total": 194,
            "skip": 0,
            "limit": 1
        }"#;

        let page: ProductPage = serde_json::from_str(raw).expect("page envelope");
        assert_eq!(page.products.len(), 1);
        assert_eq!(
            page.products.first().map(|p| p.id),
            Some(ProductId::new(1))
        );
    }

    #[test]
    fn endpoints_join_onto_the_base_url() {
        let base = Url::parse("https://dummyjson.com/").expect("url");
        let client = CatalogClient::new(&base);

        assert_eq!(client.endpoint("products/7"), "https://dummyjson.com/products/7");
        assert_eq!(
            client.endpoint("products/category/beauty"),
            "https://dummyjson.com/products/category/beauty"
        );
    }
}
