//! Organization lifecycle orchestration.
//!
//! Each operation is a short-lived saga over non-transactional primitives:
//! the physical partition operation cannot join the registry write in one
//! transaction, so step ordering bounds every inconsistency window.
//!
//! Create runs control-plane first: registry row, then admin row, then the
//! admin backfill, then the physical partition. An admin-email conflict
//! triggers a compensating deletion of the fresh registry row.
//!
//! Delete runs data-plane first: the partition is dropped before the
//! registry row and admin rows, so metadata never visibly outlives data. A
//! transient failure leaves the tenant fully intact and the call retryable.
//!
//! Rename moves the partition before the registry update. A transient
//! failure leaves the old record pointing at the still-existing old
//! partition, which is consistent and retryable.

use std::sync::Arc;

use tessera_auth::{PasswordHasher, TokenService};
use tessera_core::TenantId;
use tessera_db::{derive_partition_id, Administrator, DbError, PartitionManager, Tenant};
use tessera_store::DocumentStore;

use crate::error::OrgError;

/// Composes the registry, partition manager, credential store, and token
/// service into the lifecycle operations.
///
/// Stateless between requests; the only shared state is the store handle
/// and the immutable token configuration, so concurrent sagas never
/// coordinate in-process. Uniqueness races are settled by the store's
/// unique indexes, not by the fast-path lookups here.
#[derive(Clone)]
pub struct OrgService {
    store: Arc<dyn DocumentStore>,
    partitions: PartitionManager,
    hasher: PasswordHasher,
    tokens: TokenService,
}

impl OrgService {
    /// Create the orchestrator over a shared store handle.
    #[must_use]
    pub fn new(store: Arc<dyn DocumentStore>, tokens: TokenService) -> Self {
        Self {
            partitions: PartitionManager::new(store.clone()),
            store,
            hasher: PasswordHasher::new(),
            tokens,
        }
    }

    /// Replace the password hasher.
    ///
    /// Tests use this to swap in cheaper Argon2 parameters.
    #[must_use]
    pub fn with_hasher(mut self, hasher: PasswordHasher) -> Self {
        self.hasher = hasher;
        self
    }

    /// The token service this orchestrator issues tokens with.
    #[must_use]
    pub fn tokens(&self) -> &TokenService {
        &self.tokens
    }

    /// Create an organization together with its administrator and physical
    /// partition.
    pub async fn create(
        &self,
        name: &str,
        admin_email: &str,
        admin_password: &str,
    ) -> Result<Tenant, OrgError> {
        let store = self.store.as_ref();

        // Fast path only; the unique index on the registry settles races.
        if Tenant::find_by_name(store, name).await?.is_some() {
            return Err(OrgError::Conflict(
                "organization name already exists".to_string(),
            ));
        }

        let partition_id = derive_partition_id(name);
        let password_hash = self.hasher.hash(admin_password)?;

        // Registry row first, with a placeholder admin reference. The
        // tenant-without-admin window is bounded by the backfill below.
        let tenant = Tenant::insert(store, name, &partition_id).await?;

        let admin =
            match Administrator::insert(store, admin_email, &password_hash, tenant.id).await {
                Ok(admin) => admin,
                Err(DbError::EmailConflict) => {
                    // Compensate: without the admin the fresh registry row
                    // would be orphaned. Best effort; an orphan is logged.
                    match Tenant::delete(store, tenant.id).await {
                        Ok(_) => tracing::warn!(
                            tenant_id = %tenant.id,
                            name,
                            "rolled back tenant row after admin email conflict"
                        ),
                        Err(e) => tracing::error!(
                            tenant_id = %tenant.id,
                            name,
                            error = %e,
                            "failed to roll back tenant row; orphaned registry row remains"
                        ),
                    }
                    return Err(DbError::EmailConflict.into());
                }
                Err(e) => return Err(e.into()),
            };

        if Tenant::set_admin(store, tenant.id, admin.id).await? == 0 {
            return Err(OrgError::Inconsistent(format!(
                "tenant {} vanished before admin backfill",
                tenant.id
            )));
        }

        // Physical partition last. On a transient failure the registry row
        // already claims the partition exists; surface a retryable error and
        // record the divergence. Not auto-healed.
        match self.partitions.create(&partition_id).await {
            Ok(()) => {}
            Err(DbError::Unavailable(msg)) => {
                tracing::error!(
                    tenant_id = %tenant.id,
                    partition_id,
                    error = %msg,
                    "partition creation failed after registry commit; registry and store disagree until retried"
                );
                return Err(OrgError::StoreUnavailable);
            }
            Err(e) => return Err(e.into()),
        }

        let refreshed = Tenant::find_by_id(store, tenant.id)
            .await?
            .ok_or_else(|| {
                OrgError::Inconsistent(format!("tenant {} vanished after creation", tenant.id))
            })?;

        tracing::info!(
            tenant_id = %refreshed.id,
            name = %refreshed.name,
            partition_id = %refreshed.partition_id,
            "organization created"
        );
        Ok(refreshed)
    }

    /// Look up an organization by display name.
    pub async fn get(&self, name: &str) -> Result<Tenant, OrgError> {
        Tenant::find_by_name(self.store.as_ref(), name)
            .await?
            .ok_or(OrgError::NotFound)
    }

    /// Authenticate an administrator and issue a token scoped to their
    /// tenant.
    ///
    /// Unknown email and wrong password are indistinguishable: both produce
    /// the same generic `Unauthorized`.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<String, OrgError> {
        let Some(admin) = Administrator::find_by_email(self.store.as_ref(), email).await? else {
            return Err(OrgError::Unauthorized);
        };

        if !self.hasher.verify(password, &admin.password_hash) {
            return Err(OrgError::Unauthorized);
        }

        let token = self.tokens.issue(admin.id, admin.tenant_id, None)?;
        tracing::info!(tenant_id = %admin.tenant_id, "administrator authenticated");
        Ok(token)
    }

    /// Delete an organization, its partition, and its administrator.
    ///
    /// A tenant may only delete itself: `caller` must equal the target's id.
    pub async fn delete(&self, name: &str, caller: TenantId) -> Result<(), OrgError> {
        let store = self.store.as_ref();

        let tenant = Tenant::find_by_name(store, name)
            .await?
            .ok_or(OrgError::NotFound)?;

        if tenant.id != caller {
            return Err(OrgError::Forbidden);
        }

        // Data-plane first: if the drop fails transiently nothing else has
        // happened and the whole operation is safe to retry.
        match self.partitions.drop(&tenant.partition_id).await {
            Ok(()) => {}
            Err(DbError::Unavailable(_)) => return Err(OrgError::StoreUnavailable),
            Err(DbError::PartitionMissing(p)) => {
                return Err(OrgError::Inconsistent(format!(
                    "partition {p} missing while registry row for tenant {} exists",
                    tenant.id
                )));
            }
            Err(e) => return Err(e.into()),
        }

        Tenant::delete(store, tenant.id).await?;
        Administrator::delete_for_tenant(store, tenant.id).await?;

        tracing::info!(tenant_id = %tenant.id, name, "organization deleted");
        Ok(())
    }

    /// Rename an organization, swapping its partition in lockstep.
    ///
    /// A missing or unchanged `new_name` is a no-op returning the current
    /// record.
    pub async fn rename(
        &self,
        name: &str,
        new_name: Option<&str>,
        caller: TenantId,
    ) -> Result<Tenant, OrgError> {
        let store = self.store.as_ref();

        let tenant = Tenant::find_by_name(store, name)
            .await?
            .ok_or(OrgError::NotFound)?;

        if tenant.id != caller {
            return Err(OrgError::Forbidden);
        }

        let Some(new_name) = new_name else {
            return Ok(tenant);
        };
        if new_name == name {
            return Ok(tenant);
        }

        // Fast path only; the registry's unique indexes settle races.
        if Tenant::find_by_name(store, new_name).await?.is_some() {
            return Err(OrgError::Conflict(
                "new organization name already exists".to_string(),
            ));
        }

        let new_partition_id = derive_partition_id(new_name);

        // Partition before metadata: a transient failure here leaves the old
        // record pointing at the still-existing old partition, which is
        // consistent and retryable.
        match self
            .partitions
            .rename(&tenant.partition_id, &new_partition_id)
            .await
        {
            Ok(()) => {}
            Err(DbError::Unavailable(_)) => return Err(OrgError::StoreUnavailable),
            Err(DbError::PartitionMissing(p)) => {
                return Err(OrgError::Inconsistent(format!(
                    "partition {p} missing while registry row for tenant {} exists",
                    tenant.id
                )));
            }
            Err(e) => return Err(e.into()),
        }

        // Name and partition id change together in one registry update.
        let result = Tenant::apply_rename(store, tenant.id, new_name, &new_partition_id).await;
        match result {
            Ok(0) => {
                return Err(OrgError::Inconsistent(format!(
                    "tenant {} vanished during rename",
                    tenant.id
                )))
            }
            Ok(_) => {}
            Err(e) => {
                // A concurrent writer took the new name between the fast
                // path and this update. Swing the partition back so the
                // record and the physical namespace stay in lockstep.
                match self
                    .partitions
                    .rename(&new_partition_id, &tenant.partition_id)
                    .await
                {
                    Ok(()) => tracing::warn!(
                        tenant_id = %tenant.id,
                        "rolled back partition rename after registry update failure"
                    ),
                    Err(rollback) => tracing::error!(
                        tenant_id = %tenant.id,
                        error = %rollback,
                        "failed to roll back partition rename; registry and store disagree"
                    ),
                }
                return Err(e.into());
            }
        }

        let refreshed = Tenant::find_by_id(store, tenant.id)
            .await?
            .ok_or_else(|| {
                OrgError::Inconsistent(format!("tenant {} vanished after rename", tenant.id))
            })?;

        tracing::info!(
            tenant_id = %refreshed.id,
            old_name = name,
            new_name = %refreshed.name,
            partition_id = %refreshed.partition_id,
            "organization renamed"
        );
        Ok(refreshed)
    }
}
