//! Collection codec over the backing store.
//!
//! Collections are stored as one JSON array per key. Reads never fail the
//! caller: an absent key, an unreadable substrate or a corrupt payload all
//! come back as the empty collection, with the failure logged. Writes and
//! deletes are likewise logged and swallowed - a failed write leaves the
//! previously persisted value in place, and the caller's next read reflects
//! the pre-mutation state.

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{error, warn};

use crate::storage::KeyValueStore;

/// Read the collection under `key`, substituting empty on any failure.
pub(crate) fn read_entries<T: DeserializeOwned>(backing: &dyn KeyValueStore, key: &str) -> Vec<T> {
    let raw = match backing.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(error) => {
            warn!(key, %error, "backing store unreadable, treating collection as empty");
            return Vec::new();
        }
    };

    match serde_json::from_str(&raw) {
        Ok(entries) => entries,
        Err(error) => {
            warn!(key, %error, "corrupt collection payload, treating as empty");
            Vec::new()
        }
    }
}

/// Serialize `entries` and overwrite `key` with the whole collection.
pub(crate) fn write_entries<T: Serialize>(backing: &dyn KeyValueStore, key: &str, entries: &[T]) {
    let raw = match serde_json::to_string(entries) {
        Ok(raw) => raw,
        Err(error) => {
            error!(key, %error, "failed to serialize collection, keeping prior state");
            return;
        }
    };

    if let Err(error) = backing.set(key, &raw) {
        error!(key, %error, "failed to persist collection, keeping prior state");
    }
}

/// Delete the collection under `key`.
pub(crate) fn remove_entries(backing: &dyn KeyValueStore, key: &str) {
    if let Err(error) = backing.remove(key) {
        error!(key, %error, "failed to delete collection");
    }
}

#[cfg(test)]
mod tests {
    use bozor_core::{CartEntry, ProductId};
    use rust_decimal::Decimal;

    use super::*;
    use crate::storage::MemoryStore;

    fn entry(id: i64, quantity: u32) -> CartEntry {
        CartEntry {
            id: ProductId::new(id),
            title: format!("item {id}"),
            price: Decimal::from(1_000),
            discount_percentage: Decimal::ZERO,
            rating: 4.0,
            stock: 5,
            brand: String::new(),
            category: "misc".to_string(),
            thumbnail: String::new(),
            images: Vec::new(),
            quantity,
        }
    }

    #[test]
    fn round_trip_preserves_entries_and_order() {
        let backing = MemoryStore::new();
        let written = vec![entry(3, 2), entry(1, 1), entry(2, 7)];

        write_entries(&backing, "cart-items", &written);
        let read: Vec<CartEntry> = read_entries(&backing, "cart-items");

        assert_eq!(read, written);
    }

    #[test]
    fn absent_key_reads_as_empty() {
        let backing = MemoryStore::new();
        let read: Vec<CartEntry> = read_entries(&backing, "cart-items");
        assert!(read.is_empty());
    }

    #[test]
    fn corrupt_payload_reads_as_empty() {
        let backing = MemoryStore::new();
        backing.set("cart-items", "{not json").expect("set");

        let read: Vec<CartEntry> = read_entries(&backing, "cart-items");
        assert!(read.is_empty());
    }

    #[test]
    fn wrong_shape_reads_as_empty() {
        let backing = MemoryStore::new();
        backing.set("cart-items", "{\"id\": 1}").expect("set");

        let read: Vec<CartEntry> = read_entries(&backing, "cart-items");
        assert!(read.is_empty());
    }

    #[test]
    fn remove_deletes_the_key() {
        let backing = MemoryStore::new();
        write_entries(&backing, "cart-items", &[entry(1, 1)]);

        remove_entries(&backing, "cart-items");
        assert!(backing.get("cart-items").expect("get").is_none());
    }
}
