//! Integration tests for the organization lifecycle sagas.
//!
//! Runs the orchestrator against the in-memory store prepared exactly like
//! the binary prepares it, so unique-index behavior matches production.

use std::sync::Arc;

use chrono::Duration;
use tessera_api_orgs::{OrgError, OrgService};
use tessera_auth::{PasswordHasher, TokenService};
use tessera_core::TenantId;
use tessera_db::{bootstrap::prepare_store, derive_partition_id};
use tessera_store::{DocumentStore, MemoryStore};

const SECRET: &[u8] = b"lifecycle-test-secret-32-bytes-long!";

async fn service() -> (OrgService, MemoryStore) {
    let store = MemoryStore::new();
    prepare_store(&store).await.unwrap();

    let tokens = TokenService::new(SECRET, Duration::minutes(30));
    let service = OrgService::new(Arc::new(store.clone()), tokens)
        .with_hasher(PasswordHasher::with_params(4096, 1, 1).unwrap());
    (service, store)
}

#[tokio::test]
async fn test_create_then_get_round_trip() {
    let (service, store) = service().await;

    let created = service
        .create("Acme", "admin@acme.io", "s3cret-pass")
        .await
        .unwrap();

    let fetched = service.get("Acme").await.unwrap();
    assert_eq!(fetched, created);
    assert_eq!(fetched.partition_id, derive_partition_id("Acme"));
    assert!(fetched.admin_id.is_some());

    // The physical partition exists under the derived identifier.
    assert!(store.collection_exists("org_acme").await.unwrap());
}

#[tokio::test]
async fn test_create_multi_word_name_partition() {
    let (service, store) = service().await;

    let created = service
        .create("Acme Corp", "admin@acme.io", "s3cret-pass")
        .await
        .unwrap();

    assert_eq!(created.partition_id, "org_acme_corp");
    assert!(store.collection_exists("org_acme_corp").await.unwrap());
}

#[tokio::test]
async fn test_get_missing_is_not_found() {
    let (service, _) = service().await;
    assert!(matches!(
        service.get("Ghost").await.unwrap_err(),
        OrgError::NotFound
    ));
}

#[tokio::test]
async fn test_duplicate_name_is_conflict() {
    let (service, _) = service().await;

    service
        .create("Acme", "first@acme.io", "s3cret-pass")
        .await
        .unwrap();

    let err = service
        .create("Acme", "second@acme.io", "s3cret-pass")
        .await
        .unwrap_err();
    assert!(matches!(err, OrgError::Conflict(_)));
}

#[tokio::test]
async fn test_concurrent_creates_exactly_one_wins() {
    let (service, store) = service().await;

    let first = service.create("Acme", "first@acme.io", "s3cret-pass");
    let second = service.create("Acme", "second@acme.io", "s3cret-pass");
    let (a, b) = tokio::join!(first, second);

    // Exactly one succeeds; the store's unique index is the arbiter.
    assert_eq!(a.is_ok() as u8 + b.is_ok() as u8, 1);
    let loser = if a.is_err() { a.unwrap_err() } else { b.unwrap_err() };
    assert!(matches!(loser, OrgError::Conflict(_)));

    assert_eq!(store.count("organizations").await, 1);
    assert!(store.collection_exists("org_acme").await.unwrap());
}

#[tokio::test]
async fn test_duplicate_email_leaves_no_orphan() {
    let (service, store) = service().await;

    service
        .create("Acme", "admin@acme.io", "s3cret-pass")
        .await
        .unwrap();

    let err = service
        .create("Globex", "admin@acme.io", "other-pass")
        .await
        .unwrap_err();
    assert!(matches!(err, OrgError::Conflict(_)));

    // The compensating deletion removed the half-created tenant row, and
    // the partition step was never reached.
    assert!(matches!(
        service.get("Globex").await.unwrap_err(),
        OrgError::NotFound
    ));
    assert!(!store.collection_exists("org_globex").await.unwrap());
    assert_eq!(store.count("organizations").await, 1);
}

#[tokio::test]
async fn test_authenticate_issues_tenant_scoped_token() {
    let (service, _) = service().await;

    let created = service
        .create("Acme", "admin@acme.io", "s3cret-pass")
        .await
        .unwrap();

    let token = service
        .authenticate("admin@acme.io", "s3cret-pass")
        .await
        .unwrap();

    let claims = service.tokens().validate(&token).unwrap();
    assert_eq!(claims.tenant_id(), created.id);
    assert_eq!(claims.subject_id(), created.admin_id);
}

#[tokio::test]
async fn test_authenticate_failures_are_indistinguishable() {
    let (service, _) = service().await;

    service
        .create("Acme", "admin@acme.io", "s3cret-pass")
        .await
        .unwrap();

    let wrong_password = service
        .authenticate("admin@acme.io", "wrong-password")
        .await
        .unwrap_err();
    let unknown_email = service
        .authenticate("ghost@acme.io", "s3cret-pass")
        .await
        .unwrap_err();

    assert!(matches!(wrong_password, OrgError::Unauthorized));
    assert!(matches!(unknown_email, OrgError::Unauthorized));
    // Bit-identical boundary shape is asserted in the router tests.
}

#[tokio::test]
async fn test_delete_by_owner_removes_everything() {
    let (service, store) = service().await;

    let created = service
        .create("Acme", "admin@acme.io", "s3cret-pass")
        .await
        .unwrap();

    service.delete("Acme", created.id).await.unwrap();

    assert!(matches!(
        service.get("Acme").await.unwrap_err(),
        OrgError::NotFound
    ));
    assert!(!store.collection_exists("org_acme").await.unwrap());
    // Administrator went with the tenant: the credentials no longer work.
    assert!(matches!(
        service
            .authenticate("admin@acme.io", "s3cret-pass")
            .await
            .unwrap_err(),
        OrgError::Unauthorized
    ));
}

#[tokio::test]
async fn test_delete_by_other_tenant_is_forbidden_and_mutates_nothing() {
    let (service, store) = service().await;

    service
        .create("Acme", "admin@acme.io", "s3cret-pass")
        .await
        .unwrap();

    let err = service.delete("Acme", TenantId::new()).await.unwrap_err();
    assert!(matches!(err, OrgError::Forbidden));

    // No partition or metadata mutation occurred.
    assert!(service.get("Acme").await.is_ok());
    assert!(store.collection_exists("org_acme").await.unwrap());
    assert_eq!(store.count("administrators").await, 1);
}

#[tokio::test]
async fn test_delete_missing_is_not_found() {
    let (service, _) = service().await;
    assert!(matches!(
        service.delete("Ghost", TenantId::new()).await.unwrap_err(),
        OrgError::NotFound
    ));
}

#[tokio::test]
async fn test_email_freed_after_delete() {
    let (service, _) = service().await;

    let created = service
        .create("Acme", "admin@acme.io", "s3cret-pass")
        .await
        .unwrap();
    service.delete("Acme", created.id).await.unwrap();

    // The email can back a brand-new organization.
    service
        .create("Acme", "admin@acme.io", "s3cret-pass")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_rename_swaps_name_and_partition_in_lockstep() {
    let (service, store) = service().await;

    let created = service
        .create("Acme", "admin@acme.io", "s3cret-pass")
        .await
        .unwrap();

    let renamed = service
        .rename("Acme", Some("Acme Corp"), created.id)
        .await
        .unwrap();

    assert_eq!(renamed.id, created.id);
    assert_eq!(renamed.name, "Acme Corp");
    assert_eq!(renamed.partition_id, derive_partition_id("Acme Corp"));
    assert_eq!(renamed.created_at, created.created_at);
    assert_eq!(renamed.admin_id, created.admin_id);

    assert!(matches!(
        service.get("Acme").await.unwrap_err(),
        OrgError::NotFound
    ));
    assert_eq!(service.get("Acme Corp").await.unwrap(), renamed);

    // The old partition was renamed away, not copied.
    assert!(!store.collection_exists("org_acme").await.unwrap());
    assert!(store.collection_exists("org_acme_corp").await.unwrap());
}

#[tokio::test]
async fn test_rename_preserves_partition_contents() {
    let (service, store) = service().await;

    let created = service
        .create("Acme", "admin@acme.io", "s3cret-pass")
        .await
        .unwrap();

    // A document living in the tenant's partition survives the rename.
    let mut doc = tessera_store::Document::new();
    doc.insert("record".to_string(), serde_json::Value::from(1));
    store.insert_one("org_acme", doc).await.unwrap();

    service
        .rename("Acme", Some("Acme Corp"), created.id)
        .await
        .unwrap();

    assert_eq!(store.count("org_acme_corp").await, 1);
}

#[tokio::test]
async fn test_rename_noop_when_name_unchanged_or_absent() {
    let (service, _) = service().await;

    let created = service
        .create("Acme", "admin@acme.io", "s3cret-pass")
        .await
        .unwrap();

    let same = service.rename("Acme", Some("Acme"), created.id).await.unwrap();
    assert_eq!(same, created);

    let none = service.rename("Acme", None, created.id).await.unwrap();
    assert_eq!(none, created);
}

#[tokio::test]
async fn test_rename_to_taken_name_is_conflict() {
    let (service, _) = service().await;

    let acme = service
        .create("Acme", "admin@acme.io", "s3cret-pass")
        .await
        .unwrap();
    service
        .create("Globex", "admin@globex.io", "s3cret-pass")
        .await
        .unwrap();

    let err = service
        .rename("Acme", Some("Globex"), acme.id)
        .await
        .unwrap_err();
    assert!(matches!(err, OrgError::Conflict(_)));

    // Nothing moved.
    assert!(service.get("Acme").await.is_ok());
    assert!(service.get("Globex").await.is_ok());
}

#[tokio::test]
async fn test_rename_by_other_tenant_is_forbidden() {
    let (service, store) = service().await;

    service
        .create("Acme", "admin@acme.io", "s3cret-pass")
        .await
        .unwrap();

    let err = service
        .rename("Acme", Some("Acme Corp"), TenantId::new())
        .await
        .unwrap_err();
    assert!(matches!(err, OrgError::Forbidden));
    assert!(store.collection_exists("org_acme").await.unwrap());
}

#[tokio::test]
async fn test_tenants_are_isolated() {
    let (service, _) = service().await;

    let acme = service
        .create("Acme", "admin@acme.io", "s3cret-pass")
        .await
        .unwrap();
    let globex = service
        .create("Globex", "admin@globex.io", "s3cret-pass")
        .await
        .unwrap();

    // Each admin's token is scoped to exactly their own tenant.
    let acme_token = service
        .authenticate("admin@acme.io", "s3cret-pass")
        .await
        .unwrap();
    let claims = service.tokens().validate(&acme_token).unwrap();
    assert_eq!(claims.tenant_id(), acme.id);
    assert_ne!(claims.tenant_id(), globex.id);

    // And that scope cannot touch the other organization.
    assert!(matches!(
        service.delete("Globex", acme.id).await.unwrap_err(),
        OrgError::Forbidden
    ));
}
