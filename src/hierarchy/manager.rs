//! Hierarchy manager

use std::sync::Arc;

use tracing::debug;

use crate::model::{ModelType, ParentLink, Record, TypeRegistry};
use crate::store::StoreClient;

use super::errors::{HierarchyError, HierarchyResult};

/// A parent supplied by the caller: either an already-resolved instance or a
/// declared type to resolve lazily.
#[derive(Debug)]
pub enum ParentRef {
    /// Concrete owning record, authoritative as-is
    Instance(Record),
    /// Record type, resolved on first demand by walking the path
    Type(&'static ModelType),
}

impl From<Record> for ParentRef {
    fn from(record: Record) -> Self {
        Self::Instance(record)
    }
}

impl From<&'static ModelType> for ParentRef {
    fn from(model: &'static ModelType) -> Self {
        Self::Type(model)
    }
}

/// Resolves parent records and builds sub-collection records.
///
/// Holds the registry of known record types (parent links may only name
/// registered types) and the store client used for lazy resolution.
pub struct HierarchyManager {
    types: TypeRegistry,
    client: Arc<dyn StoreClient>,
}

impl HierarchyManager {
    /// Create a manager over the given client and type registry.
    pub fn new(client: Arc<dyn StoreClient>, types: TypeRegistry) -> Self {
        Self { types, client }
    }

    /// The registry of known record types.
    pub fn types(&self) -> &TypeRegistry {
        &self.types
    }

    /// Build an unpersisted child record nested under `owner`.
    ///
    /// The child's collection path is `owner`'s document path plus
    /// `collection` (the child type's default collection name when `None`),
    /// and its parent link holds `owner` directly — no fetch will ever be
    /// needed to resolve it.
    pub fn sub_record(
        &self,
        owner: &Record,
        collection: Option<&str>,
        child: &'static ModelType,
    ) -> HierarchyResult<Record> {
        let name = collection.unwrap_or(child.collection);
        let table = owner.path()?.child_collection(name)?;

        let mut record = Record::new(child);
        record.set_collection(table);
        record.set_parent(ParentLink::Resolved(Box::new(owner.clone())));
        Ok(record)
    }

    /// Attach a parent to `record`, as a concrete instance or a declared
    /// type.
    ///
    /// The parent's type must be registered and be `record`'s declared
    /// ancestor type; anything else is a configuration bug surfaced as
    /// [`HierarchyError::InvalidParent`].
    pub fn set_parent_link(
        &self,
        record: &mut Record,
        parent: impl Into<ParentRef>,
    ) -> HierarchyResult<()> {
        match parent.into() {
            ParentRef::Instance(instance) => {
                self.check_ancestor_type(record.model(), instance.model())?;
                record.set_parent(ParentLink::Resolved(Box::new(instance)));
            }
            ParentRef::Type(model) => {
                self.check_ancestor_type(record.model(), model)?;
                record.set_parent(ParentLink::Pending(model));
            }
        }
        Ok(())
    }

    /// Resolve `record`'s parent, fetching and caching it when pending.
    ///
    /// - already resolved: returns the cached instance, no I/O;
    /// - pending type: climbs the record's path to its parent document,
    ///   fetches the snapshot there, hydrates, caches — at most once per
    ///   record lifetime;
    /// - unset: `Ok(None)`, the valid terminal state for top-level records.
    pub fn resolve_parent<'r>(
        &self,
        record: &'r mut Record,
    ) -> HierarchyResult<Option<&'r Record>> {
        if let Some(parent_type) = record.parent().pending() {
            let path = record
                .document_path()
                .ok_or(HierarchyError::MissingPath)?;
            let parent_path = path.parent_document()?;

            debug!(path = %parent_path, model = parent_type.name, "fetching parent document");
            let snapshot = self
                .client
                .get_document(&parent_path)?
                .ok_or_else(|| HierarchyError::ParentNotFound(parent_path.to_string()))?;

            let parent = Record::from_snapshot(parent_type, &snapshot)?;
            record.set_parent(ParentLink::Resolved(Box::new(parent)));
        }

        Ok(record.parent().resolved())
    }

    fn check_ancestor_type(
        &self,
        child: &ModelType,
        parent: &ModelType,
    ) -> HierarchyResult<()> {
        if !self.types.is_registered(parent) {
            return Err(HierarchyError::InvalidParent(format!(
                "{} is not a registered record type",
                parent.name
            )));
        }
        if !parent.is_ancestor_type_of(child) {
            return Err(HierarchyError::InvalidParent(format!(
                "{} is not an ancestor type of {}",
                parent.name, child.name
            )));
        }
        Ok(())
    }
}
