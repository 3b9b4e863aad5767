//! Error types for the storage layer.

use tessera_core::HookError;
use thiserror::Error;

/// A result type using `StoreError`.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The requested record was not found.
    #[error("record not found")]
    NotFound,

    /// A lifecycle hook rejected the operation before any write.
    #[error("lifecycle hook rejected operation: {0}")]
    Hook(#[from] HookError),

    /// Serialization or deserialization failed.
    #[error("serialization error: {0}")]
    Serialization(String),
}
