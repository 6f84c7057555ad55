//! In-memory document store.
//!
//! Backs the binary in development and the test suites. Collections live in
//! a shared map behind an async `RwLock`; declared unique indexes are
//! enforced on every insert and update, which makes this implementation the
//! authority on uniqueness exactly like a driver-backed one would be.

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::document::{Document, Filter};
use crate::error::{StoreError, StoreResult};
use crate::traits::DocumentStore;

#[derive(Debug, Default)]
struct Collection {
    documents: Vec<Document>,
    unique_fields: BTreeSet<String>,
}

impl Collection {
    /// Check that `candidate` does not collide with any document other than
    /// the one at `skip` on a declared unique field.
    fn check_unique(&self, candidate: &Document, skip: Option<usize>) -> Option<String> {
        for field in &self.unique_fields {
            let Some(value) = candidate.get(field) else {
                continue;
            };
            if value.is_null() {
                continue;
            }
            let collides = self
                .documents
                .iter()
                .enumerate()
                .filter(|(i, _)| Some(*i) != skip)
                .any(|(_, doc)| doc.get(field) == Some(value));
            if collides {
                return Some(field.clone());
            }
        }
        None
    }
}

/// In-memory [`DocumentStore`] implementation.
///
/// Cloning is cheap; clones share the same underlying state.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<HashMap<String, Collection>>>,
}

impl MemoryStore {
    /// Create a new, empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents in a collection, 0 when absent.
    ///
    /// Test helper; not part of the store capability.
    pub async fn count(&self, collection: &str) -> usize {
        self.inner
            .read()
            .await
            .get(collection)
            .map_or(0, |c| c.documents.len())
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }

    async fn create_collection(&self, name: &str) -> StoreResult<()> {
        let mut inner = self.inner.write().await;
        if inner.contains_key(name) {
            return Err(StoreError::CollectionExists(name.to_string()));
        }
        inner.insert(name.to_string(), Collection::default());
        Ok(())
    }

    async fn rename_collection(&self, from: &str, to: &str) -> StoreResult<()> {
        let mut inner = self.inner.write().await;
        if inner.contains_key(to) {
            return Err(StoreError::CollectionExists(to.to_string()));
        }
        let collection = inner
            .remove(from)
            .ok_or_else(|| StoreError::CollectionNotFound(from.to_string()))?;
        inner.insert(to.to_string(), collection);
        Ok(())
    }

    async fn drop_collection(&self, name: &str) -> StoreResult<()> {
        let mut inner = self.inner.write().await;
        inner
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| StoreError::CollectionNotFound(name.to_string()))
    }

    async fn collection_exists(&self, name: &str) -> StoreResult<bool> {
        Ok(self.inner.read().await.contains_key(name))
    }

    async fn ensure_unique_index(&self, collection: &str, field: &str) -> StoreResult<()> {
        let mut inner = self.inner.write().await;
        inner
            .entry(collection.to_string())
            .or_default()
            .unique_fields
            .insert(field.to_string());
        Ok(())
    }

    async fn insert_one(&self, collection: &str, document: Document) -> StoreResult<()> {
        let mut inner = self.inner.write().await;
        let entry = inner.entry(collection.to_string()).or_default();
        if let Some(field) = entry.check_unique(&document, None) {
            return Err(StoreError::DuplicateKey {
                collection: collection.to_string(),
                field,
            });
        }
        entry.documents.push(document);
        Ok(())
    }

    async fn find_one(&self, collection: &str, filter: &Filter) -> StoreResult<Option<Document>> {
        let inner = self.inner.read().await;
        Ok(inner
            .get(collection)
            .and_then(|c| c.documents.iter().find(|doc| filter.matches(doc)).cloned()))
    }

    async fn update_one(
        &self,
        collection: &str,
        filter: &Filter,
        patch: Document,
    ) -> StoreResult<u64> {
        let mut inner = self.inner.write().await;
        let Some(entry) = inner.get_mut(collection) else {
            return Ok(0);
        };
        let Some(index) = entry.documents.iter().position(|doc| filter.matches(doc)) else {
            return Ok(0);
        };
        let mut patched = entry.documents[index].clone();
        for (key, value) in patch {
            patched.insert(key, value);
        }
        if let Some(field) = entry.check_unique(&patched, Some(index)) {
            return Err(StoreError::DuplicateKey {
                collection: collection.to_string(),
                field,
            });
        }
        entry.documents[index] = patched;
        Ok(1)
    }

    async fn delete_one(&self, collection: &str, filter: &Filter) -> StoreResult<u64> {
        let mut inner = self.inner.write().await;
        let Some(entry) = inner.get_mut(collection) else {
            return Ok(0);
        };
        match entry.documents.iter().position(|doc| filter.matches(doc)) {
            Some(index) => {
                entry.documents.remove(index);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_many(&self, collection: &str, filter: &Filter) -> StoreResult<u64> {
        let mut inner = self.inner.write().await;
        let Some(entry) = inner.get_mut(collection) else {
            return Ok(0);
        };
        let before = entry.documents.len();
        entry.documents.retain(|doc| !filter.matches(doc));
        Ok((before - entry.documents.len()) as u64)
    }
}
