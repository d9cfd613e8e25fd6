//! Recursive Delete Tests
//!
//! Deletion invariants:
//! - Depth-first: a document's descendants are deleted strictly before it
//! - The target document itself goes last
//! - Nothing under the target path survives, siblings outside it do
//! - Re-running delete on an already-deleted path is a no-op
//! - Batch size bounds page size, not correctness

use std::sync::Mutex;

use doctree::delete::RecursiveDeleter;
use doctree::path::{CollectionPath, DocumentPath};
use doctree::store::{MemoryStore, Snapshot, StoreClient, StoreMap, StoreResult};

// =============================================================================
// Helpers
// =============================================================================

/// Store wrapper that records the order of document deletions.
struct RecordingClient {
    inner: MemoryStore,
    deletions: Mutex<Vec<String>>,
}

impl RecordingClient {
    fn new(inner: MemoryStore) -> Self {
        Self {
            inner,
            deletions: Mutex::new(Vec::new()),
        }
    }

    fn deletions(&self) -> Vec<String> {
        self.deletions.lock().unwrap().clone()
    }

    fn position(&self, path: &str) -> usize {
        self.deletions()
            .iter()
            .position(|p| p == path)
            .unwrap_or_else(|| panic!("{} was never deleted", path))
    }
}

impl StoreClient for RecordingClient {
    fn get_document(&self, path: &DocumentPath) -> StoreResult<Option<Snapshot>> {
        self.inner.get_document(path)
    }

    fn add_document(
        &self,
        collection: &CollectionPath,
        fields: StoreMap,
    ) -> StoreResult<DocumentPath> {
        self.inner.add_document(collection, fields)
    }

    fn update_document(&self, path: &DocumentPath, fields: StoreMap) -> StoreResult<()> {
        self.inner.update_document(path, fields)
    }

    fn delete_document(&self, path: &DocumentPath) -> StoreResult<()> {
        self.deletions.lock().unwrap().push(path.to_string());
        self.inner.delete_document(path)
    }

    fn list_collections(&self, path: &DocumentPath) -> StoreResult<Vec<CollectionPath>> {
        self.inner.list_collections(path)
    }

    fn list_documents(
        &self,
        collection: &CollectionPath,
        limit: usize,
    ) -> StoreResult<Vec<DocumentPath>> {
        self.inner.list_documents(collection, limit)
    }
}

fn seed(store: &MemoryStore, paths: &[&str]) {
    for raw in paths {
        store.put(&DocumentPath::parse(raw).unwrap(), StoreMap::new());
    }
}

// =============================================================================
// Ordering
// =============================================================================

/// `users/u1` owns orders o1 and o2; o1 owns item i1. Expected: i1 before
/// o1, both before u1; o2 anywhere before u1.
#[test]
fn test_descendants_delete_before_ancestors() {
    let store = MemoryStore::new();
    seed(
        &store,
        &[
            "users/u1",
            "users/u1/orders/o1",
            "users/u1/orders/o1/items/i1",
            "users/u1/orders/o2",
        ],
    );

    let client = RecordingClient::new(store.clone());
    let target = DocumentPath::parse("users/u1").unwrap();
    RecursiveDeleter::new(&client).delete(&target).unwrap();

    assert_eq!(client.deletions().len(), 4);
    assert!(client.position("users/u1/orders/o1/items/i1") < client.position("users/u1/orders/o1"));
    assert!(client.position("users/u1/orders/o1") < client.position("users/u1"));
    assert!(client.position("users/u1/orders/o2") < client.position("users/u1"));
    assert_eq!(client.position("users/u1"), 3);
}

#[test]
fn test_every_subtree_deletes_its_leaves_first() {
    let store = MemoryStore::new();
    seed(
        &store,
        &[
            "users/u1",
            "users/u1/orders/o1",
            "users/u1/orders/o1/items/i1",
            "users/u1/orders/o1/items/i2",
            "users/u1/orders/o1/items/i1/tags/t1",
            "users/u1/notes/n1",
        ],
    );

    let client = RecordingClient::new(store.clone());
    let target = DocumentPath::parse("users/u1").unwrap();
    RecursiveDeleter::new(&client).delete(&target).unwrap();

    // For every deletion, all paths strictly beneath it must appear earlier.
    let deletions = client.deletions();
    for (i, deleted) in deletions.iter().enumerate() {
        let ancestor = DocumentPath::parse(deleted).unwrap();
        for later in &deletions[i + 1..] {
            let descendant = DocumentPath::parse(later).unwrap();
            assert!(
                !ancestor.is_ancestor_of(&descendant),
                "{} was deleted before its descendant {}",
                deleted,
                later
            );
        }
    }
}

// =============================================================================
// Completeness & Idempotence
// =============================================================================

#[test]
fn test_nothing_survives_under_target_and_siblings_do() {
    let store = MemoryStore::new();
    seed(
        &store,
        &[
            "users/u1",
            "users/u1/orders/o1",
            "users/u1/orders/o1/items/i1",
            "users/u2",
            "users/u2/orders/o9",
            "courses/c1",
        ],
    );

    let target = DocumentPath::parse("users/u1").unwrap();
    RecursiveDeleter::new(&store).delete(&target).unwrap();

    let survivors = store.paths();
    assert_eq!(survivors, vec!["courses/c1", "users/u2", "users/u2/orders/o9"]);
    for raw in survivors {
        let path = DocumentPath::parse(&raw).unwrap();
        assert!(!target.is_ancestor_of(&path));
    }
}

#[test]
fn test_repeat_delete_is_a_noop() {
    let store = MemoryStore::new();
    seed(&store, &["users/u1", "users/u1/orders/o1", "users/u2"]);

    let client = RecordingClient::new(store.clone());
    let target = DocumentPath::parse("users/u1").unwrap();
    let deleter = RecursiveDeleter::new(&client);

    deleter.delete(&target).unwrap();
    let after_first = client.deletions().len();

    deleter.delete(&target).unwrap();
    // Only the target document's own (absent, still-succeeding) delete runs.
    assert_eq!(client.deletions().len(), after_first + 1);
    assert_eq!(store.paths(), vec!["users/u2"]);
}

// =============================================================================
// Batching
// =============================================================================

#[test]
fn test_collection_larger_than_batch_is_fully_drained() {
    let store = MemoryStore::new();
    store.put(&DocumentPath::parse("users/u1").unwrap(), StoreMap::new());
    for i in 0..37 {
        let raw = format!("users/u1/orders/o{:02}", i);
        store.put(&DocumentPath::parse(&raw).unwrap(), StoreMap::new());
    }

    let client = RecordingClient::new(store.clone());
    let target = DocumentPath::parse("users/u1").unwrap();
    RecursiveDeleter::new(&client)
        .with_batch_size(10)
        .delete(&target)
        .unwrap();

    assert!(store.is_empty());
    assert_eq!(client.deletions().len(), 38);
    assert_eq!(client.position("users/u1"), 37);
}
