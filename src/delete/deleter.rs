//! Work-stack recursive deleter

use tracing::{debug, trace};

use crate::path::{CollectionPath, DocumentPath};
use crate::store::{StoreClient, StoreResult};

/// Upper bound on documents fetched per listing round-trip.
///
/// Bounds memory and request size, not correctness; a smaller batch just
/// issues more round-trips.
pub const DEFAULT_BATCH_SIZE: usize = 1000;

/// One pending step of the deletion walk.
#[derive(Debug)]
enum Task {
    /// Discover a document's sub-collections, then schedule its removal
    Visit(DocumentPath),
    /// Fetch one page of a collection; finished when a fetch comes back empty
    Drain(CollectionPath),
    /// Delete the document itself
    Remove(DocumentPath),
}

/// Deletes a document and everything nested beneath it, leaves first.
///
/// The walk is depth-first over an explicit LIFO stack: a document's removal
/// is pushed before its collection drains, so it only executes once every
/// sub-collection has come back empty, and a collection is re-listed only
/// after the subtrees of its previous page are gone. Deleted documents are
/// absent from subsequent listings, which makes re-running `delete` on a
/// partially removed subtree safe (idempotent, though not atomic).
///
/// No partial-failure recovery happens here: the first failing store call
/// aborts the walk and propagates.
pub struct RecursiveDeleter<'a> {
    client: &'a dyn StoreClient,
    batch_size: usize,
}

impl<'a> RecursiveDeleter<'a> {
    /// A deleter with the default batch size.
    pub fn new(client: &'a dyn StoreClient) -> Self {
        Self {
            client,
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }

    /// Override the per-round-trip document limit (minimum 1).
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    /// Delete the document at `path` and its entire subtree.
    pub fn delete(&self, path: &DocumentPath) -> StoreResult<()> {
        let mut stack = vec![Task::Visit(path.clone())];

        while let Some(task) = stack.pop() {
            match task {
                Task::Visit(doc) => {
                    // Removal goes below the drains so it runs last.
                    stack.push(Task::Remove(doc.clone()));
                    let collections = self.client.list_collections(&doc)?;
                    if !collections.is_empty() {
                        debug!(
                            path = %doc,
                            collections = collections.len(),
                            "expanding document subtree"
                        );
                    }
                    for collection in collections {
                        stack.push(Task::Drain(collection));
                    }
                }
                Task::Drain(collection) => {
                    let page = self.client.list_documents(&collection, self.batch_size)?;
                    if !page.is_empty() {
                        debug!(
                            collection = %collection,
                            documents = page.len(),
                            "draining collection page"
                        );
                        // Drain again after this page's subtrees are gone; a
                        // collection is finished only when a fetch is empty.
                        stack.push(Task::Drain(collection));
                        for doc in page {
                            stack.push(Task::Visit(doc));
                        }
                    }
                }
                Task::Remove(doc) => {
                    trace!(path = %doc, "deleting document");
                    self.client.delete_document(&doc)?;
                }
            }
        }

        Ok(())
    }
}
