//! Domain types for the Bozor catalog and collections.

pub mod id;
pub mod product;

pub use id::ProductId;
pub use product::{CartEntry, Product, WishlistEntry};
