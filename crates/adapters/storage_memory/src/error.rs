//! Storage-specific error type.

use todohub_domain::error::TodoError;

/// Errors originating from the in-memory storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A previous holder of the lock panicked mid-operation.
    #[error("todo store lock poisoned")]
    Poisoned,

    /// The counter reached the largest representable id.
    #[error("todo id space exhausted")]
    IdSpaceExhausted,
}

impl From<StorageError> for TodoError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}
