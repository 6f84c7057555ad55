//! Organization request/response models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tessera_core::{AdminId, TenantId};
use tessera_db::Tenant;
use utoipa::ToSchema;

/// Minimum organization name length.
const MIN_NAME_CHARS: usize = 3;

/// Maximum organization name length.
const MAX_NAME_CHARS: usize = 100;

/// Minimum administrator password length.
const MIN_PASSWORD_CHARS: usize = 8;

/// Validate an organization display name.
///
/// Names are ASCII-alphanumeric words separated by single spaces. Together
/// with the registry's unique index on the derived partition id, this keeps
/// the name → partition derivation collision-free: underscores, doubled
/// spaces, and edge whitespace would otherwise let two distinct names derive
/// the same partition.
pub(crate) fn validate_org_name(name: &str) -> Option<String> {
    let chars = name.chars().count();
    if chars < MIN_NAME_CHARS {
        return Some(format!(
            "organization name must be at least {MIN_NAME_CHARS} characters"
        ));
    }
    if chars > MAX_NAME_CHARS {
        return Some(format!(
            "organization name must be at most {MAX_NAME_CHARS} characters"
        ));
    }
    if name.starts_with(' ') || name.ends_with(' ') || name.contains("  ") {
        return Some(
            "organization name must not have leading, trailing, or doubled spaces".to_string(),
        );
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == ' ')
    {
        return Some(
            "organization name may only contain letters, digits, and spaces".to_string(),
        );
    }
    None
}

/// Structural email check: non-empty local and domain parts, a dot in the
/// domain, no whitespace.
pub(crate) fn validate_email(email: &str) -> Option<String> {
    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    };
    if valid {
        None
    } else {
        Some("email address is not valid".to_string())
    }
}

/// Request body for `POST /orgs`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateOrgRequest {
    /// Display name for the new organization.
    pub name: String,
    /// Email for the organization's administrator account.
    pub admin_email: String,
    /// Password for the administrator account.
    pub admin_password: String,
}

impl CreateOrgRequest {
    /// Validate the request, returning a message for the first violation.
    #[must_use]
    pub fn validate(&self) -> Option<String> {
        if let Some(error) = validate_org_name(&self.name) {
            return Some(error);
        }
        if let Some(error) = validate_email(&self.admin_email) {
            return Some(error);
        }
        if self.admin_password.chars().count() < MIN_PASSWORD_CHARS {
            return Some(format!(
                "password must be at least {MIN_PASSWORD_CHARS} characters"
            ));
        }
        None
    }
}

/// Request body for `PUT /orgs/:name`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct RenameOrgRequest {
    /// New display name; omitting it (or repeating the current name) makes
    /// the call a no-op.
    #[serde(default)]
    pub new_name: Option<String>,
}

impl RenameOrgRequest {
    /// Validate the request, returning a message for the first violation.
    #[must_use]
    pub fn validate(&self) -> Option<String> {
        self.new_name.as_deref().and_then(validate_org_name)
    }
}

/// An organization record as exposed at the boundary.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct OrgResponse {
    /// Organization id.
    #[schema(value_type = String)]
    pub id: TenantId,
    /// Display name.
    pub name: String,
    /// Identifier of the organization's data partition.
    pub partition_id: String,
    /// Administrator id; set for every committed organization.
    #[schema(value_type = Option<String>)]
    pub admin_id: Option<AdminId>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl From<Tenant> for OrgResponse {
    fn from(tenant: Tenant) -> Self {
        Self {
            id: tenant.id,
            name: tenant.name,
            partition_id: tenant.partition_id,
            admin_id: tenant.admin_id,
            created_at: tenant.created_at,
        }
    }
}
