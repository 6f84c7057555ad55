//! Lookup handler for organizations.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::{ErrorResponse, OrgError};
use crate::models::OrgResponse;
use crate::router::OrgAppState;

/// GET /orgs/:name
///
/// Look up an organization by display name.
#[utoipa::path(
    get,
    path = "/orgs/{name}",
    params(("name" = String, Path, description = "Organization display name")),
    responses(
        (status = 200, description = "Organization record", body = OrgResponse),
        (status = 404, description = "Organization not found", body = ErrorResponse),
    ),
    tag = "Organizations"
)]
pub async fn get_org_handler(
    State(state): State<OrgAppState>,
    Path(name): Path<String>,
) -> Result<Json<OrgResponse>, OrgError> {
    let tenant = state.service.get(&name).await?;
    Ok(Json(tenant.into()))
}
