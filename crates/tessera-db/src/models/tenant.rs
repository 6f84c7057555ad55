//! Tenant record for the master registry.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tessera_core::{AdminId, TenantId};
use tessera_store::{Document, DocumentStore, Filter};

use crate::error::DbError;

/// A tenant in the master registry.
///
/// The registry row is the single source of truth for the mapping from
/// display name to partition identifier. For a committed tenant the
/// invariant `partition_id == derive_partition_id(name)` always holds;
/// renames swap both fields in one update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tenant {
    /// Unique identifier, assigned at creation and immutable.
    pub id: TenantId,

    /// Human-readable display name, unique across all tenants.
    pub name: String,

    /// Identifier of the physical data partition derived from the name.
    pub partition_id: String,

    /// The single administrator owning this tenant.
    ///
    /// `None` only inside the bounded window during creation, before the
    /// administrator row exists and the reference is backfilled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_id: Option<AdminId>,

    /// Timestamp when the tenant was created.
    pub created_at: DateTime<Utc>,
}

impl Tenant {
    /// Master collection holding tenant records.
    pub const COLLECTION: &'static str = "organizations";

    fn from_document(document: Document) -> Result<Self, DbError> {
        serde_json::from_value(Value::Object(document))
            .map_err(|e| DbError::Corrupted(format!("tenant record: {e}")))
    }

    fn to_document(&self) -> Result<Document, DbError> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) | Err(_) => Err(DbError::Corrupted("tenant record not an object".to_string())),
        }
    }

    /// Exact-match lookup by display name.
    pub async fn find_by_name(
        store: &dyn DocumentStore,
        name: &str,
    ) -> Result<Option<Self>, DbError> {
        store
            .find_one(Self::COLLECTION, &Filter::eq("name", name))
            .await?
            .map(Self::from_document)
            .transpose()
    }

    /// Lookup by tenant id.
    pub async fn find_by_id(
        store: &dyn DocumentStore,
        id: TenantId,
    ) -> Result<Option<Self>, DbError> {
        store
            .find_one(Self::COLLECTION, &Filter::eq("id", id.to_string()))
            .await?
            .map(Self::from_document)
            .transpose()
    }

    /// Insert a new tenant row with no administrator reference yet.
    ///
    /// Fails with `NameConflict` when the name (or its derived partition id)
    /// is already taken; the store's unique indexes are the authority.
    pub async fn insert(
        store: &dyn DocumentStore,
        name: &str,
        partition_id: &str,
    ) -> Result<Self, DbError> {
        let tenant = Self {
            id: TenantId::new(),
            name: name.to_string(),
            partition_id: partition_id.to_string(),
            admin_id: None,
            created_at: Utc::now(),
        };

        store
            .insert_one(Self::COLLECTION, tenant.to_document()?)
            .await?;
        Ok(tenant)
    }

    /// Backfill the administrator reference after the admin row exists.
    ///
    /// Returns the number of rows updated (0 when the tenant vanished).
    pub async fn set_admin(
        store: &dyn DocumentStore,
        id: TenantId,
        admin_id: AdminId,
    ) -> Result<u64, DbError> {
        let mut patch = Document::new();
        patch.insert("admin_id".to_string(), Value::String(admin_id.to_string()));

        Ok(store
            .update_one(Self::COLLECTION, &Filter::eq("id", id.to_string()), patch)
            .await?)
    }

    /// Apply a rename: display name and partition id change together in a
    /// single update so the record is never observable with only one of
    /// them swapped.
    pub async fn apply_rename(
        store: &dyn DocumentStore,
        id: TenantId,
        new_name: &str,
        new_partition_id: &str,
    ) -> Result<u64, DbError> {
        let mut patch = Document::new();
        patch.insert("name".to_string(), Value::String(new_name.to_string()));
        patch.insert(
            "partition_id".to_string(),
            Value::String(new_partition_id.to_string()),
        );

        Ok(store
            .update_one(Self::COLLECTION, &Filter::eq("id", id.to_string()), patch)
            .await?)
    }

    /// Delete the tenant row.
    ///
    /// Returns the number of rows deleted.
    pub async fn delete(store: &dyn DocumentStore, id: TenantId) -> Result<u64, DbError> {
        Ok(store
            .delete_one(Self::COLLECTION, &Filter::eq("id", id.to_string()))
            .await?)
    }
}
