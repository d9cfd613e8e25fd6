//! Record persistence error types

use thiserror::Error;

use crate::cast::CastError;
use crate::path::PathError;
use crate::store::StoreError;

/// Result type for record persistence operations
pub type RecordResult<T> = Result<T, RecordError>;

/// Failures in record persistence glue.
///
/// Path, cast, and store failures pass through transparently; nothing is
/// recovered locally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// Insert attempted on a record that already has a document path
    #[error("Record already persisted at {0}")]
    AlreadyPersisted(String),

    /// Path derivation failed
    #[error(transparent)]
    Path(#[from] PathError),

    /// Cast pipeline failed
    #[error(transparent)]
    Cast(#[from] CastError),

    /// Store client failed
    #[error(transparent)]
    Store(#[from] StoreError),
}
