//! Record type and persistence glue

use tracing::debug;

use crate::cast::{AttrValue, AttributeCastPipeline, AttributeMap, CastResult};
use crate::delete::RecursiveDeleter;
use crate::path::{CollectionPath, DocumentPath, PathError, PathResult};
use crate::store::{Snapshot, StoreClient, StoreMap};

use super::errors::{RecordError, RecordResult};
use super::model_type::ModelType;
use super::parent::ParentLink;

/// A typed entity mapped onto one document.
///
/// The document path is set exactly once per identity: assigned after a
/// successful insert (from the store-generated id) or copied from a snapshot
/// during hydration. `original` holds the store-native map as of the last
/// sync and is the basis of the dirty diff.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    model: &'static ModelType,
    id: Option<String>,
    attributes: AttributeMap,
    original: StoreMap,
    path: Option<DocumentPath>,
    collection: Option<CollectionPath>,
    parent: ParentLink,
}

impl Record {
    /// A fresh, unpersisted record of the given type.
    ///
    /// The parent link starts from the type's declaration: pending when the
    /// type names a parent, otherwise unset.
    pub fn new(model: &'static ModelType) -> Self {
        Self {
            model,
            id: None,
            attributes: AttributeMap::new(),
            original: StoreMap::new(),
            path: None,
            collection: None,
            parent: model.parent.map(ParentLink::Pending).unwrap_or_default(),
        }
    }

    /// Hydrate a record from a store snapshot.
    ///
    /// Runs the reverse cast pipeline over the snapshot fields, copies the
    /// snapshot path, and takes the id from the path's final segment. The
    /// hydrated record starts clean (nothing dirty).
    pub fn from_snapshot(model: &'static ModelType, snapshot: &Snapshot) -> CastResult<Self> {
        let attributes =
            AttributeCastPipeline::from_store_representation(snapshot.fields(), model.cast_registry())?;
        Ok(Self {
            model,
            id: Some(snapshot.id().to_string()),
            attributes,
            original: snapshot.fields().clone(),
            path: Some(snapshot.path().clone()),
            collection: None,
            parent: model.parent.map(ParentLink::Pending).unwrap_or_default(),
        })
    }

    /// The record's model descriptor.
    pub fn model(&self) -> &'static ModelType {
        self.model
    }

    /// Store-assigned (or hydrated) document id.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Typed attribute map.
    pub fn attributes(&self) -> &AttributeMap {
        &self.attributes
    }

    /// One typed attribute.
    pub fn attribute(&self, key: &str) -> Option<&AttrValue> {
        self.attributes.get(key)
    }

    /// Set one typed attribute.
    pub fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<AttrValue>) {
        self.attributes.insert(key.into(), value.into());
    }

    /// The record's document path, failing when it has never been persisted
    /// or hydrated.
    pub fn path(&self) -> PathResult<&DocumentPath> {
        self.path.as_ref().ok_or(PathError::NotSet)
    }

    /// The document path, if set.
    pub fn document_path(&self) -> Option<&DocumentPath> {
        self.path.as_ref()
    }

    /// True once the record has a document path.
    pub fn is_persisted(&self) -> bool {
        self.path.is_some()
    }

    /// The collection new instances insert into: the sub-collection override
    /// when set, otherwise the model's default top-level collection.
    pub fn collection_path(&self) -> PathResult<CollectionPath> {
        match &self.collection {
            Some(collection) => Ok(collection.clone()),
            None => CollectionPath::root(self.model.collection),
        }
    }

    /// The record's parent link.
    pub fn parent(&self) -> &ParentLink {
        &self.parent
    }

    pub(crate) fn set_parent(&mut self, parent: ParentLink) {
        self.parent = parent;
    }

    pub(crate) fn set_collection(&mut self, collection: CollectionPath) {
        self.collection = Some(collection);
    }

    /// Store-native attribute map for a fresh insert (full cast pipeline).
    pub fn attributes_for_insert(&self) -> CastResult<StoreMap> {
        AttributeCastPipeline::to_store_representation(&self.attributes, self.model.cast_registry())
    }

    /// Attributes changed since the last sync, in store representation.
    ///
    /// The comparison runs on serializer output, never on raw typed values,
    /// so an update transmits exactly what an insert would have.
    pub fn dirty(&self) -> CastResult<StoreMap> {
        let current = self.attributes_for_insert()?;
        let mut dirty = StoreMap::new();
        for (key, value) in current {
            if self.original.get(&key) != Some(&value) {
                dirty.insert(key, value);
            }
        }
        Ok(dirty)
    }

    /// True when any attribute differs from the last-synced state.
    pub fn is_dirty(&self) -> CastResult<bool> {
        Ok(!self.dirty()?.is_empty())
    }

    /// Insert this record and adopt the store-assigned id and path.
    pub fn insert(&mut self, client: &dyn StoreClient) -> RecordResult<()> {
        if let Some(path) = &self.path {
            return Err(RecordError::AlreadyPersisted(path.to_string()));
        }

        let fields = self.attributes_for_insert()?;
        let collection = self.collection_path()?;
        let path = client.add_document(&collection, fields.clone())?;
        debug!(path = %path, model = self.model.name, "inserted record");

        self.id = Some(path.id().to_string());
        self.path = Some(path);
        self.original = fields;
        Ok(())
    }

    /// Push dirty attributes to the store. No-op when nothing changed.
    pub fn update(&mut self, client: &dyn StoreClient) -> RecordResult<()> {
        let path = self.path()?.clone();
        let dirty = self.dirty()?;
        if dirty.is_empty() {
            return Ok(());
        }

        client.update_document(&path, dirty.clone())?;
        debug!(path = %path, changed = dirty.len(), "updated record");
        for (key, value) in dirty {
            self.original.insert(key, value);
        }
        Ok(())
    }

    /// Insert when unpersisted, update otherwise.
    pub fn save(&mut self, client: &dyn StoreClient) -> RecordResult<()> {
        if self.is_persisted() {
            self.update(client)
        } else {
            self.insert(client)
        }
    }

    /// Recursively delete this record's document and everything nested
    /// beneath it, then clear the record's own persistence bookkeeping.
    pub fn delete(&mut self, client: &dyn StoreClient) -> RecordResult<()> {
        let path = self.path()?.clone();
        RecursiveDeleter::new(client).delete(&path)?;

        self.path = None;
        self.original.clear();
        Ok(())
    }
}
