//! Rename handler for organizations.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::auth::AuthContext;
use crate::error::{ErrorResponse, OrgError};
use crate::models::{OrgResponse, RenameOrgRequest};
use crate::router::OrgAppState;

/// PUT /orgs/:name
///
/// Rename an organization; its data partition is renamed in lockstep. An
/// absent or unchanged `new_name` returns the current record unchanged.
/// The bearer token must be scoped to the organization being renamed.
#[utoipa::path(
    put,
    path = "/orgs/{name}",
    params(("name" = String, Path, description = "Current organization display name")),
    request_body = RenameOrgRequest,
    responses(
        (status = 200, description = "Updated organization record", body = OrgResponse),
        (status = 400, description = "Validation error or new name conflict", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Token scoped to a different organization", body = ErrorResponse),
        (status = 404, description = "Organization not found", body = ErrorResponse),
    ),
    tag = "Organizations",
    security(("bearerAuth" = []))
)]
pub async fn rename_org_handler(
    State(state): State<OrgAppState>,
    auth: AuthContext,
    Path(name): Path<String>,
    Json(request): Json<RenameOrgRequest>,
) -> Result<Json<OrgResponse>, OrgError> {
    if let Some(error) = request.validate() {
        return Err(OrgError::Validation(error));
    }

    let tenant = state
        .service
        .rename(&name, request.new_name.as_deref(), auth.tenant_id)
        .await?;

    Ok(Json(tenant.into()))
}
