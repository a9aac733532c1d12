//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`TodoError`]
//! via `#[from]` or an explicit `From` impl.

/// Top-level error shared by the application and adapter layers.
#[derive(Debug, thiserror::Error)]
pub enum TodoError {
    /// Input could not be turned into a domain value.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// The backing store failed.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Reasons an input is rejected before reaching the store.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// The id path segment is not an integer.
    #[error("Invalid ID")]
    InvalidId {
        /// The raw segment as received.
        raw: String,
    },
}
