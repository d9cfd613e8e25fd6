//! Path error types

use thiserror::Error;

/// Result type for path operations
pub type PathResult<T> = Result<T, PathError>;

/// Errors produced by path derivation and parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// Path requested on a record that has never been persisted or hydrated
    #[error("Document path not set: record has never been persisted or hydrated")]
    NotSet,

    /// Blank or malformed collection name supplied when deriving a child path
    #[error("Invalid collection name: {0:?}")]
    InvalidCollectionName(String),

    /// Ancestor path requested on a path with no document-level ancestor
    #[error("Path {0:?} has no document-level ancestor")]
    Root(String),

    /// Raw path string violates the segment model
    #[error("Malformed path {path:?}: {reason}")]
    Malformed {
        /// Offending raw path
        path: String,
        /// What was violated
        reason: &'static str,
    },
}
