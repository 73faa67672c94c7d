//! Durable key-value backing store.
//!
//! The stores in this crate treat persistence as an opaque map from string
//! key to string value with per-key atomic writes. [`FileStore`] is the
//! durable adapter used by the application; [`MemoryStore`] backs tests.
//! Stores receive the adapter as an injected `Arc<dyn KeyValueStore>`
//! rather than reaching for an ambient global.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use thiserror::Error;

/// Failure talking to the backing store.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying filesystem operation failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Key contains characters the adapter cannot map to its substrate.
    #[error("invalid storage key: {0:?}")]
    InvalidKey(String),
}

/// An opaque durable map from string key to string value.
///
/// Contract: `get` on an absent key returns `Ok(None)`; `set` overwrites
/// the whole value atomically; `remove` on an absent key is a no-op. The
/// trait is object-safe so the concrete substrate can be swapped per
/// environment (durable on disk in the application, in-memory in tests).
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the substrate cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the write does not commit; the
    /// previously stored value stays visible to future reads.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`. Absent keys are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the substrate cannot be modified.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
