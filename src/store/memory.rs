//! In-memory store backend
//!
//! Reference implementation of [`StoreClient`] over a flat map keyed by path
//! string. Matches the hierarchy semantics of a real document store: a
//! document may have descendants without existing itself (it is then only a
//! collection container and is invisible to document listings), and deleting
//! an absent document succeeds.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, RwLock};

use uuid::Uuid;

use crate::path::{CollectionPath, DocumentPath};

use super::client::{Snapshot, StoreClient};
use super::errors::{StoreError, StoreResult};
use super::StoreMap;

/// Thread-safe in-process document store.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    documents: Arc<RwLock<BTreeMap<String, StoreMap>>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a document at an explicit path, creating or replacing it.
    ///
    /// Test seeding helper; real inserts go through `add_document`.
    pub fn put(&self, path: &DocumentPath, fields: StoreMap) {
        self.documents
            .write()
            .expect("store lock poisoned")
            .insert(path.to_string(), fields);
    }

    /// True if a document exists at `path`.
    pub fn contains(&self, path: &DocumentPath) -> bool {
        self.documents
            .read()
            .expect("store lock poisoned")
            .contains_key(&path.to_string())
    }

    /// Number of documents currently stored.
    pub fn len(&self) -> usize {
        self.documents.read().expect("store lock poisoned").len()
    }

    /// True when no documents are stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All document paths, in key order.
    pub fn paths(&self) -> Vec<String> {
        self.documents
            .read()
            .expect("store lock poisoned")
            .keys()
            .cloned()
            .collect()
    }
}

impl StoreClient for MemoryStore {
    fn get_document(&self, path: &DocumentPath) -> StoreResult<Option<Snapshot>> {
        let documents = self.documents.read().expect("store lock poisoned");
        Ok(documents
            .get(&path.to_string())
            .map(|fields| Snapshot::new(path.clone(), fields.clone())))
    }

    fn add_document(
        &self,
        collection: &CollectionPath,
        fields: StoreMap,
    ) -> StoreResult<DocumentPath> {
        let id = Uuid::new_v4().to_string();
        let path = collection
            .doc(&id)
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        self.documents
            .write()
            .expect("store lock poisoned")
            .insert(path.to_string(), fields);
        Ok(path)
    }

    fn update_document(&self, path: &DocumentPath, fields: StoreMap) -> StoreResult<()> {
        let mut documents = self.documents.write().expect("store lock poisoned");
        match documents.get_mut(&path.to_string()) {
            Some(existing) => {
                for (key, value) in fields {
                    existing.insert(key, value);
                }
                Ok(())
            }
            None => Err(StoreError::NotFound(path.to_string())),
        }
    }

    fn delete_document(&self, path: &DocumentPath) -> StoreResult<()> {
        self.documents
            .write()
            .expect("store lock poisoned")
            .remove(&path.to_string());
        Ok(())
    }

    fn list_collections(&self, path: &DocumentPath) -> StoreResult<Vec<CollectionPath>> {
        let prefix = format!("{}/", path);
        let documents = self.documents.read().expect("store lock poisoned");

        let mut names = BTreeSet::new();
        for key in documents.keys() {
            if let Some(rest) = key.strip_prefix(&prefix) {
                if let Some((name, _)) = rest.split_once('/') {
                    names.insert(name.to_string());
                }
            }
        }

        let mut collections = Vec::with_capacity(names.len());
        for name in names {
            collections.push(
                path.child_collection(&name)
                    .map_err(|e| StoreError::Backend(e.to_string()))?,
            );
        }
        Ok(collections)
    }

    fn list_documents(
        &self,
        collection: &CollectionPath,
        limit: usize,
    ) -> StoreResult<Vec<DocumentPath>> {
        let prefix = format!("{}/", collection);
        let documents = self.documents.read().expect("store lock poisoned");

        let mut page = Vec::new();
        for key in documents.keys() {
            if page.len() >= limit {
                break;
            }
            if let Some(rest) = key.strip_prefix(&prefix) {
                // Direct members only; deeper keys belong to sub-collections.
                if !rest.contains('/') {
                    page.push(
                        collection
                            .doc(rest)
                            .map_err(|e| StoreError::Backend(e.to_string()))?,
                    );
                }
            }
        }
        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(pairs: &[(&str, serde_json::Value)]) -> StoreMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_get_and_put_roundtrip() {
        let store = MemoryStore::new();
        let path = DocumentPath::parse("users/u1").unwrap();
        store.put(&path, fields(&[("name", json!("Alice"))]));

        let snapshot = store.get_document(&path).unwrap().unwrap();
        assert_eq!(snapshot.id(), "u1");
        assert_eq!(snapshot.fields().get("name"), Some(&json!("Alice")));
    }

    #[test]
    fn test_add_document_assigns_id_in_collection() {
        let store = MemoryStore::new();
        let coll = CollectionPath::root("users").unwrap();
        let path = store
            .add_document(&coll, fields(&[("name", json!("Bob"))]))
            .unwrap();

        assert_eq!(path.collection_name(), "users");
        assert!(store.contains(&path));
    }

    #[test]
    fn test_update_requires_existing_document() {
        let store = MemoryStore::new();
        let path = DocumentPath::parse("users/u1").unwrap();
        let err = store
            .update_document(&path, fields(&[("name", json!("x"))]))
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[test]
    fn test_update_merges_fields() {
        let store = MemoryStore::new();
        let path = DocumentPath::parse("users/u1").unwrap();
        store.put(&path, fields(&[("name", json!("Alice")), ("age", json!(30))]));
        store
            .update_document(&path, fields(&[("age", json!(31))]))
            .unwrap();

        let snapshot = store.get_document(&path).unwrap().unwrap();
        assert_eq!(snapshot.fields().get("name"), Some(&json!("Alice")));
        assert_eq!(snapshot.fields().get("age"), Some(&json!(31)));
    }

    #[test]
    fn test_delete_absent_document_succeeds() {
        let store = MemoryStore::new();
        let path = DocumentPath::parse("users/u1").unwrap();
        assert!(store.delete_document(&path).is_ok());
    }

    #[test]
    fn test_list_collections_deduplicates() {
        let store = MemoryStore::new();
        let u1 = DocumentPath::parse("users/u1").unwrap();
        store.put(&DocumentPath::parse("users/u1/orders/o1").unwrap(), StoreMap::new());
        store.put(&DocumentPath::parse("users/u1/orders/o2").unwrap(), StoreMap::new());
        store.put(&DocumentPath::parse("users/u1/notes/n1").unwrap(), StoreMap::new());

        let collections = store.list_collections(&u1).unwrap();
        let names: Vec<_> = collections.iter().map(|c| c.name().to_string()).collect();
        assert_eq!(names, vec!["notes", "orders"]);
    }

    #[test]
    fn test_list_collections_sees_containers_without_documents() {
        // users/u1 never exists as a document, yet owns a sub-collection.
        let store = MemoryStore::new();
        let u1 = DocumentPath::parse("users/u1").unwrap();
        store.put(&DocumentPath::parse("users/u1/orders/o1").unwrap(), StoreMap::new());

        assert!(!store.contains(&u1));
        assert_eq!(store.list_collections(&u1).unwrap().len(), 1);
    }

    #[test]
    fn test_list_documents_respects_limit_and_depth() {
        let store = MemoryStore::new();
        let coll = CollectionPath::root("users").unwrap();
        for i in 0..5 {
            let path = DocumentPath::parse(&format!("users/u{}", i)).unwrap();
            store.put(&path, StoreMap::new());
        }
        // Nested document must not show up in the top-level listing.
        store.put(&DocumentPath::parse("users/u0/orders/o1").unwrap(), StoreMap::new());

        let page = store.list_documents(&coll, 3).unwrap();
        assert_eq!(page.len(), 3);
        assert!(page.iter().all(|p| p.depth() == 1));
    }

    #[test]
    fn test_prefix_scan_does_not_match_sibling_ids() {
        let store = MemoryStore::new();
        store.put(&DocumentPath::parse("users/u1/orders/o1").unwrap(), StoreMap::new());
        store.put(&DocumentPath::parse("users/u10/orders/o1").unwrap(), StoreMap::new());

        let u1 = DocumentPath::parse("users/u1").unwrap();
        let collections = store.list_collections(&u1).unwrap();
        assert_eq!(collections.len(), 1);
        assert_eq!(collections[0].to_string(), "users/u1/orders");
    }
}
