//! Hierarchy error types

use thiserror::Error;

use crate::cast::CastError;
use crate::path::PathError;
use crate::store::StoreError;

/// Result type for hierarchy operations
pub type HierarchyResult<T> = Result<T, HierarchyError>;

/// Failures in parent/child resolution
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HierarchyError {
    /// Parent resolution attempted on a record without a document path
    #[error("Cannot resolve parent: record has no document path")]
    MissingPath,

    /// The store has no document at the computed ancestor path.
    ///
    /// A data-consistency issue, deliberately not treated as "no parent".
    #[error("Parent document not found at {0}")]
    ParentNotFound(String),

    /// Declared parent is not a recognized or ancestor-compatible type
    #[error("Invalid parent: {0}")]
    InvalidParent(String),

    /// Path derivation failed
    #[error(transparent)]
    Path(#[from] PathError),

    /// Parent hydration failed
    #[error(transparent)]
    Cast(#[from] CastError),

    /// Store client failed
    #[error(transparent)]
    Store(#[from] StoreError),
}
