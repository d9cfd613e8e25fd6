//! Store client boundary
//!
//! Everything the core needs from the document store goes through the
//! [`StoreClient`] trait: point reads, inserts with store-assigned ids,
//! updates, deletes, and the two enumerations the recursive deleter walks
//! (sub-collections of a document, documents of a collection up to a limit).
//!
//! Store-level failures surface as [`StoreError`] and are passed through
//! unmodified by the layers above. [`MemoryStore`] is an in-process reference
//! backend used by the crate's own tests and usable as an embedded fake.

mod client;
mod errors;
mod memory;

pub use client::{Snapshot, StoreClient};
pub use errors::{StoreError, StoreResult};
pub use memory::MemoryStore;

/// Store-native attribute map for one document.
///
/// `serde_json::Map` keeps keys in deterministic order.
pub type StoreMap = serde_json::Map<String, serde_json::Value>;
