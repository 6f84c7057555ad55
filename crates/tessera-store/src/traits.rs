//! Store capability trait.
//!
//! Capability-based trait definition for the document store, so the registry
//! and partition manager never depend on a concrete driver.

use async_trait::async_trait;

use crate::document::{Document, Filter};
use crate::error::StoreResult;

/// The document-store capability.
///
/// Implementations must be safe to share across concurrent lifecycle
/// operations; all methods may block on I/O and are awaited without holding
/// any in-process coordination lock.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Check connectivity to the underlying store.
    async fn ping(&self) -> StoreResult<()>;

    /// Create a new, empty collection.
    ///
    /// Fails with `CollectionExists` when the name is already taken.
    async fn create_collection(&self, name: &str) -> StoreResult<()>;

    /// Rename a collection, carrying its contents.
    ///
    /// Fails with `CollectionNotFound` when `from` is absent and
    /// `CollectionExists` when `to` is already taken.
    async fn rename_collection(&self, from: &str, to: &str) -> StoreResult<()>;

    /// Drop a collection and all of its documents.
    ///
    /// Fails with `CollectionNotFound` when the collection is absent.
    async fn drop_collection(&self, name: &str) -> StoreResult<()>;

    /// Check whether a collection exists.
    async fn collection_exists(&self, name: &str) -> StoreResult<bool>;

    /// Declare a unique index on a field of a collection.
    ///
    /// Subsequent inserts and updates that would produce two documents with
    /// the same value for `field` fail with `DuplicateKey`. Creates the
    /// collection implicitly when absent. Idempotent.
    async fn ensure_unique_index(&self, collection: &str, field: &str) -> StoreResult<()>;

    /// Insert a document.
    ///
    /// Creates the collection implicitly when absent (document-store
    /// semantics).
    async fn insert_one(&self, collection: &str, document: Document) -> StoreResult<()>;

    /// Find the first document matching the filter.
    async fn find_one(&self, collection: &str, filter: &Filter) -> StoreResult<Option<Document>>;

    /// Merge `patch` into the first document matching the filter.
    ///
    /// Returns the number of documents updated (0 or 1).
    async fn update_one(
        &self,
        collection: &str,
        filter: &Filter,
        patch: Document,
    ) -> StoreResult<u64>;

    /// Delete the first document matching the filter.
    ///
    /// Returns the number of documents deleted (0 or 1).
    async fn delete_one(&self, collection: &str, filter: &Filter) -> StoreResult<u64>;

    /// Delete every document matching the filter.
    ///
    /// Returns the number of documents deleted.
    async fn delete_many(&self, collection: &str, filter: &Filter) -> StoreResult<u64>;
}
