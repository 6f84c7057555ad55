//! Token claims binding an administrator to one tenant.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use tessera_core::{AdminId, TenantId};
use uuid::Uuid;

/// Claims carried by a tenant-scoped bearer token.
///
/// Standard claims (RFC 7519) plus the tenant binding:
///
/// - `sub`: the administrator id
/// - `tid`: the tenant id the token is scoped to
/// - `exp` / `iat`: expiry and issue instants (Unix timestamps)
/// - `jti`: unique token id
///
/// A token authorizes actions on exactly the tenant in `tid`; the claim is
/// required and tokens without it are rejected as malformed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenClaims {
    /// Subject: the administrator id.
    pub sub: String,

    /// Tenant the token is scoped to.
    pub tid: Uuid,

    /// Expiration time as Unix timestamp.
    pub exp: i64,

    /// Issued at as Unix timestamp.
    pub iat: i64,

    /// Unique identifier for this token.
    #[serde(default)]
    pub jti: String,
}

impl TokenClaims {
    /// Build claims for an administrator scoped to a tenant, expiring after
    /// `ttl`.
    #[must_use]
    pub fn new(subject: AdminId, tenant: TenantId, ttl: Duration) -> Self {
        let now = Utc::now();
        Self {
            sub: subject.to_string(),
            tid: *tenant.as_uuid(),
            exp: (now + ttl).timestamp(),
            iat: now.timestamp(),
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// The tenant this token is scoped to.
    #[must_use]
    pub fn tenant_id(&self) -> TenantId {
        TenantId::from_uuid(self.tid)
    }

    /// The administrator id, when `sub` parses as one.
    #[must_use]
    pub fn subject_id(&self) -> Option<AdminId> {
        self.sub.parse().ok()
    }

    /// Check if the token has expired.
    ///
    /// Zero leeway: a token whose expiry equals the current instant is
    /// already expired, so a ttl of zero never yields a usable token.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.exp <= Utc::now().timestamp()
    }
}
