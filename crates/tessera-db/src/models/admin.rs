//! Administrator record for the master registry.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tessera_core::{AdminId, TenantId, TenantScoped};
use tessera_store::{Document, DocumentStore, Filter};

use crate::error::DbError;

/// The single credentialed user permitted to manage a tenant.
///
/// Email uniqueness is global across all tenants, not per tenant: one admin
/// per tenant, one tenant per admin. Administrators are created only as part
/// of tenant creation and destroyed only as part of tenant deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Administrator {
    /// Unique identifier.
    pub id: AdminId,

    /// Globally-unique email address.
    pub email: String,

    /// Irreversible, salted password hash (PHC string).
    pub password_hash: String,

    /// The tenant this administrator owns.
    pub tenant_id: TenantId,
}

impl TenantScoped for Administrator {
    fn tenant_id(&self) -> TenantId {
        self.tenant_id
    }
}

impl Administrator {
    /// Master collection holding administrator records.
    pub const COLLECTION: &'static str = "administrators";

    fn from_document(document: Document) -> Result<Self, DbError> {
        serde_json::from_value(Value::Object(document))
            .map_err(|e| DbError::Corrupted(format!("administrator record: {e}")))
    }

    fn to_document(&self) -> Result<Document, DbError> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) | Err(_) => Err(DbError::Corrupted(
                "administrator record not an object".to_string(),
            )),
        }
    }

    /// Global exact-match lookup by email.
    pub async fn find_by_email(
        store: &dyn DocumentStore,
        email: &str,
    ) -> Result<Option<Self>, DbError> {
        store
            .find_one(Self::COLLECTION, &Filter::eq("email", email))
            .await?
            .map(Self::from_document)
            .transpose()
    }

    /// Insert a new administrator bound to a tenant.
    ///
    /// Fails with `EmailConflict` when the email is registered anywhere;
    /// the store's global unique index on `email` is the authority.
    pub async fn insert(
        store: &dyn DocumentStore,
        email: &str,
        password_hash: &str,
        tenant_id: TenantId,
    ) -> Result<Self, DbError> {
        let admin = Self {
            id: AdminId::new(),
            email: email.to_string(),
            password_hash: password_hash.to_string(),
            tenant_id,
        };

        store
            .insert_one(Self::COLLECTION, admin.to_document()?)
            .await?;
        Ok(admin)
    }

    /// Delete every administrator owned by a tenant.
    ///
    /// Returns the number of rows deleted.
    pub async fn delete_for_tenant(
        store: &dyn DocumentStore,
        tenant_id: TenantId,
    ) -> Result<u64, DbError> {
        Ok(store
            .delete_many(
                Self::COLLECTION,
                &Filter::eq("tenant_id", tenant_id.to_string()),
            )
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bootstrap::prepare_store;
    use tessera_store::MemoryStore;

    #[tokio::test]
    async fn test_insert_and_find_by_email() {
        let store = MemoryStore::new();
        let tenant = TenantId::new();
        let inserted = Administrator::insert(&store, "admin@acme.io", "$argon2id$h", tenant)
            .await
            .unwrap();

        let found = Administrator::find_by_email(&store, "admin@acme.io")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found, inserted);
        assert_eq!(found.tenant_id(), tenant);
    }

    #[tokio::test]
    async fn test_find_missing_email_is_none() {
        let store = MemoryStore::new();
        let found = Administrator::find_by_email(&store, "ghost@acme.io")
            .await
            .unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_email_uniqueness_is_global() {
        let store = MemoryStore::new();
        prepare_store(&store).await.unwrap();

        Administrator::insert(&store, "admin@acme.io", "$argon2id$h1", TenantId::new())
            .await
            .unwrap();

        // Same email under a different tenant still conflicts
        let err =
            Administrator::insert(&store, "admin@acme.io", "$argon2id$h2", TenantId::new())
                .await
                .unwrap_err();
        assert!(matches!(err, DbError::EmailConflict));
    }

    #[tokio::test]
    async fn test_delete_for_tenant_only_removes_own_admins() {
        let store = MemoryStore::new();
        let tenant_a = TenantId::new();
        let tenant_b = TenantId::new();

        Administrator::insert(&store, "a@acme.io", "$argon2id$h", tenant_a)
            .await
            .unwrap();
        Administrator::insert(&store, "b@globex.io", "$argon2id$h", tenant_b)
            .await
            .unwrap();

        let deleted = Administrator::delete_for_tenant(&store, tenant_a)
            .await
            .unwrap();
        assert_eq!(deleted, 1);

        assert!(Administrator::find_by_email(&store, "a@acme.io")
            .await
            .unwrap()
            .is_none());
        assert!(Administrator::find_by_email(&store, "b@globex.io")
            .await
            .unwrap()
            .is_some());
    }
}
