//! In-memory backing store for tests and ephemeral sessions.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use super::{KeyValueStore, StorageError};

/// A [`KeyValueStore`] over a plain in-process map. Never fails.
///
/// Each test constructs a fresh instance, giving it an isolated "origin".
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_key_reads_as_none() {
        let store = MemoryStore::new();
        assert!(store.get("cart-items").expect("get").is_none());
    }

    #[test]
    fn set_overwrites_and_remove_deletes() {
        let store = MemoryStore::new();

        store.set("k", "[1]").expect("set");
        store.set("k", "[1,2]").expect("set");
        assert_eq!(store.get("k").expect("get").as_deref(), Some("[1,2]"));

        store.remove("k").expect("remove");
        assert!(store.get("k").expect("get").is_none());

        // Removing an absent key is a no-op.
        store.remove("k").expect("remove");
    }
}
