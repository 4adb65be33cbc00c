//! Repository Layer - Core Traits
//!
//! Defines the abstract interface for durable client-side storage.
//! Implementations can use browser localStorage, memory, etc.

use super::StorageResult;

/// String key/value storage, synchronous like `window.localStorage`
pub trait KeyValueStorage {
    /// Read a value; `Ok(None)` when the key is absent
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Write a value, replacing any previous one
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
}
