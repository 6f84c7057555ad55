//! Store preparation at startup.
//!
//! Declares the unique indexes the lifecycle depends on. Uniqueness of the
//! organization name, its derived partition id, and the administrator email
//! is enforced here, at the storage layer; the orchestrator's own lookups
//! are a fast path only and never the authority.

use tessera_store::DocumentStore;

use crate::error::DbError;
use crate::models::{Administrator, Tenant};

/// Prepare the registry collections and their unique indexes.
///
/// Idempotent; run once at startup before serving requests.
pub async fn prepare_store(store: &dyn DocumentStore) -> Result<(), DbError> {
    store.ping().await?;

    store.ensure_unique_index(Tenant::COLLECTION, "name").await?;
    store
        .ensure_unique_index(Tenant::COLLECTION, "partition_id")
        .await?;
    store
        .ensure_unique_index(Administrator::COLLECTION, "email")
        .await?;

    tracing::info!(
        organizations = Tenant::COLLECTION,
        administrators = Administrator::COLLECTION,
        "registry store prepared"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_core::TenantId;
    use tessera_store::MemoryStore;

    #[tokio::test]
    async fn test_prepare_is_idempotent() {
        let store = MemoryStore::new();
        prepare_store(&store).await.unwrap();
        prepare_store(&store).await.unwrap();
    }

    #[tokio::test]
    async fn test_prepared_store_enforces_name_uniqueness() {
        let store = MemoryStore::new();
        prepare_store(&store).await.unwrap();

        Tenant::insert(&store, "Acme", "org_acme").await.unwrap();
        let err = Tenant::insert(&store, "Acme", "org_acme_2")
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::NameConflict));
    }

    #[tokio::test]
    async fn test_prepared_store_enforces_email_uniqueness() {
        let store = MemoryStore::new();
        prepare_store(&store).await.unwrap();

        let tenant = TenantId::new();
        Administrator::insert(&store, "admin@acme.io", "$argon2id$x", tenant)
            .await
            .unwrap();
        let err = Administrator::insert(&store, "admin@acme.io", "$argon2id$y", TenantId::new())
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::EmailConflict));
    }
}
