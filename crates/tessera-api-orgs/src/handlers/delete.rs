//! Delete handler for organizations.

use axum::{
    extract::{Path, State},
    http::StatusCode,
};

use crate::auth::AuthContext;
use crate::error::{ErrorResponse, OrgError};
use crate::router::OrgAppState;

/// DELETE /orgs/:name
///
/// Delete an organization, its data partition, and its administrator. The
/// bearer token must be scoped to the organization being deleted: a tenant
/// may only delete itself.
#[utoipa::path(
    delete,
    path = "/orgs/{name}",
    params(("name" = String, Path, description = "Organization display name")),
    responses(
        (status = 204, description = "Organization deleted"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Token scoped to a different organization", body = ErrorResponse),
        (status = 404, description = "Organization not found", body = ErrorResponse),
    ),
    tag = "Organizations",
    security(("bearerAuth" = []))
)]
pub async fn delete_org_handler(
    State(state): State<OrgAppState>,
    auth: AuthContext,
    Path(name): Path<String>,
) -> Result<StatusCode, OrgError> {
    state.service.delete(&name, auth.tenant_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
