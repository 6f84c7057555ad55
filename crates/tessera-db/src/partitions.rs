//! Partition identifier derivation and physical partition operations.
//!
//! A partition is the isolated physical container (a collection) holding one
//! tenant's data. The registry record and the physical namespace must never
//! disagree, so the derivation is a pure function reproduced byte-for-byte
//! wherever it is needed.

use std::sync::Arc;

use tessera_store::DocumentStore;

use crate::error::DbError;

/// Namespace tag prefixed to every partition identifier.
pub const PARTITION_PREFIX: &str = "org_";

/// Derive the partition identifier for a display name.
///
/// Lowercases, replaces spaces with underscores, and prefixes the namespace
/// tag. Pure and deterministic: `"Acme Corp"` always yields
/// `"org_acme_corp"`.
///
/// Injectivity over allowed names is completed at the storage layer: the
/// registry carries a unique index on the derived identifier, so two names
/// that would collide here cannot both commit.
#[must_use]
pub fn derive_partition_id(name: &str) -> String {
    format!("{PARTITION_PREFIX}{}", name.to_lowercase().replace(' ', "_"))
}

/// Operations on the physical per-tenant partition namespace.
///
/// Driven by the lifecycle orchestrator in lockstep with registry writes;
/// each operation may fail transiently (`Unavailable`) or with a logic
/// error (`PartitionExists` / `PartitionMissing`).
#[derive(Clone)]
pub struct PartitionManager {
    store: Arc<dyn DocumentStore>,
}

impl PartitionManager {
    /// Create a partition manager over the shared store handle.
    #[must_use]
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Physically create a partition.
    pub async fn create(&self, partition_id: &str) -> Result<(), DbError> {
        self.store.create_collection(partition_id).await?;
        tracing::debug!(partition_id, "partition created");
        Ok(())
    }

    /// Physically rename a partition, carrying its contents.
    pub async fn rename(&self, old_id: &str, new_id: &str) -> Result<(), DbError> {
        self.store.rename_collection(old_id, new_id).await?;
        tracing::debug!(old_id, new_id, "partition renamed");
        Ok(())
    }

    /// Physically drop a partition and all of its data.
    pub async fn drop(&self, partition_id: &str) -> Result<(), DbError> {
        self.store.drop_collection(partition_id).await?;
        tracing::debug!(partition_id, "partition dropped");
        Ok(())
    }

    /// Check whether a partition exists.
    pub async fn exists(&self, partition_id: &str) -> Result<bool, DbError> {
        Ok(self.store.collection_exists(partition_id).await?)
    }
}
