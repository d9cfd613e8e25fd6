//! Cast error types

use thiserror::Error;

/// Result type for cast operations
pub type CastResult<T> = Result<T, CastError>;

/// Failures in the attribute cast pipeline.
///
/// Every variant names the offending attribute key; nothing is suppressed or
/// replaced with a default value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CastError {
    /// A custom serializer failed while producing the store representation
    #[error("Failed to serialize attribute {key:?}: {reason}")]
    Serialization {
        /// Offending attribute key
        key: String,
        /// Serializer-reported cause
        reason: String,
    },

    /// A custom serializer failed while reading the store representation
    #[error("Failed to deserialize attribute {key:?}: {reason}")]
    Deserialization {
        /// Offending attribute key
        key: String,
        /// Serializer-reported cause
        reason: String,
    },

    /// Ordinary type coercion could not produce the declared type
    #[error("Cannot coerce attribute {key:?} to {expected}")]
    Coercion {
        /// Offending attribute key
        key: String,
        /// Declared type name
        expected: &'static str,
    },
}
