//! Catalog product records and collection entries.
//!
//! `Product` is the record served by the remote catalog. `CartEntry` and
//! `WishlistEntry` are snapshots of it captured at add/like time, in the
//! exact field layout the storefront persists: camelCase names, cart
//! entries without the description, wishlist entries with it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::ProductId;

/// A full product record from the remote catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub description: String,
    /// Unit price in whole catalog currency units (no minor unit).
    pub price: Decimal,
    /// Discount already applied to `price`, in percent (0-100, usually 0-99).
    pub discount_percentage: Decimal,
    pub rating: f64,
    /// Units in stock; the UI-level cap on cart quantity.
    pub stock: u32,
    /// Some catalog records omit the brand.
    #[serde(default)]
    pub brand: String,
    pub category: String,
    pub thumbnail: String,
    pub images: Vec<String>,
}

/// One cart row: a product snapshot plus the quantity in the cart.
///
/// Quantity is at least 1 while the entry exists; a quantity of zero is
/// expressed by removing the entry, never by storing it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartEntry {
    pub id: ProductId,
    pub title: String,
    pub price: Decimal,
    pub discount_percentage: Decimal,
    pub rating: f64,
    pub stock: u32,
    #[serde(default)]
    pub brand: String,
    pub category: String,
    pub thumbnail: String,
    pub images: Vec<String>,
    pub quantity: u32,
}

impl CartEntry {
    /// Snapshot `product` into a cart entry with the given quantity.
    #[must_use]
    pub fn new(product: &Product, quantity: u32) -> Self {
        Self {
            id: product.id,
            title: product.title.clone(),
            price: product.price,
            discount_percentage: product.discount_percentage,
            rating: product.rating,
            stock: product.stock,
            brand: product.brand.clone(),
            category: product.category.clone(),
            thumbnail: product.thumbnail.clone(),
            images: product.images.clone(),
            quantity,
        }
    }

    /// Discounted price of the whole line: `price * quantity`.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }

    /// Unit price before the discount: `price / (1 - discount/100)`.
    ///
    /// # Panics
    ///
    /// Panics if `discount_percentage` is exactly 100; callers must keep
    /// discounts below 100 for priced entries.
    #[must_use]
    pub fn original_unit_price(&self) -> Decimal {
        self.price / (Decimal::ONE - self.discount_percentage / Decimal::ONE_HUNDRED)
    }

    /// Pre-discount price of the whole line.
    ///
    /// # Panics
    ///
    /// Panics if `discount_percentage` is exactly 100, as for
    /// [`Self::original_unit_price`].
    #[must_use]
    pub fn original_line_total(&self) -> Decimal {
        self.original_unit_price() * Decimal::from(self.quantity)
    }
}

/// One wishlist row: a product snapshot including the description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistEntry {
    pub id: ProductId,
    pub title: String,
    pub description: String,
    pub price: Decimal,
    pub discount_percentage: Decimal,
    pub rating: f64,
    pub stock: u32,
    #[serde(default)]
    pub brand: String,
    pub category: String,
    pub thumbnail: String,
    pub images: Vec<String>,
}

impl From<&Product> for WishlistEntry {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            title: product.title.clone(),
            description: product.description.clone(),
            price: product.price,
            discount_percentage: product.discount_percentage,
            rating: product.rating,
            stock: product.stock,
            brand: product.brand.clone(),
            category: product.category.clone(),
            thumbnail: product.thumbnail.clone(),
            images: product.images.clone(),
        }
    }
}
