//! Store client error types

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Failures reported by the external store client.
///
/// The core never reinterprets these; they abort the current operation and
/// reach the caller unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Document required to exist at this path does not
    #[error("Document not found: {0}")]
    NotFound(String),

    /// Caller lacks permission for the attempted operation
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// Store is unreachable or timed out
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// Any other backend-reported failure
    #[error("Store backend error: {0}")]
    Backend(String),
}
