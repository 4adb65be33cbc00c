//! Repository Layer
//!
//! Data access abstractions and implementations.

mod traits;
mod memory;
mod board_repo;

#[cfg(test)]
mod tests;

use thiserror::Error;

use crate::domain::DomainError;

pub use traits::KeyValueStorage;
pub use memory::MemoryStorage;
pub use board_repo::BoardRepository;

/// Storage errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Storage backend error: {0}")]
    Backend(String),
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

impl From<serde_json::Error> for StorageError {
    fn from(e: serde_json::Error) -> Self {
        StorageError::Serialization(e.to_string())
    }
}

impl From<StorageError> for DomainError {
    fn from(e: StorageError) -> Self {
        DomainError::Storage(e.to_string())
    }
}
