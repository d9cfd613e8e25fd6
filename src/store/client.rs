//! Store client trait and snapshot type

use crate::path::{CollectionPath, DocumentPath};

use super::errors::StoreResult;
use super::StoreMap;

/// Read-only materialization of one stored document: its path and its
/// native attribute map. Input to hydration; never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    path: DocumentPath,
    fields: StoreMap,
}

impl Snapshot {
    /// Create a snapshot for the document at `path`.
    pub fn new(path: DocumentPath, fields: StoreMap) -> Self {
        Self { path, fields }
    }

    /// Where the document lives.
    pub fn path(&self) -> &DocumentPath {
        &self.path
    }

    /// The document id (final path segment).
    pub fn id(&self) -> &str {
        self.path.id()
    }

    /// Store-native attribute map.
    pub fn fields(&self) -> &StoreMap {
        &self.fields
    }
}

/// The document store, seen from this layer.
///
/// Implementations are stateless, thread-safe service boundaries; the core
/// issues no store operations beyond these primitives.
pub trait StoreClient: Send + Sync {
    /// Fetch the document at `path`, if it exists.
    fn get_document(&self, path: &DocumentPath) -> StoreResult<Option<Snapshot>>;

    /// Insert a new document with a store-assigned id; returns its path.
    fn add_document(&self, collection: &CollectionPath, fields: StoreMap)
        -> StoreResult<DocumentPath>;

    /// Merge `fields` into the existing document at `path`.
    fn update_document(&self, path: &DocumentPath, fields: StoreMap) -> StoreResult<()>;

    /// Delete the document at `path`. Deleting an absent document succeeds,
    /// which is what keeps a re-run of a partial recursive delete safe.
    fn delete_document(&self, path: &DocumentPath) -> StoreResult<()>;

    /// Enumerate the sub-collections nested directly under `path`.
    fn list_collections(&self, path: &DocumentPath) -> StoreResult<Vec<CollectionPath>>;

    /// List up to `limit` document references (ids only) in `collection`.
    fn list_documents(
        &self,
        collection: &CollectionPath,
        limit: usize,
    ) -> StoreResult<Vec<DocumentPath>>;
}
