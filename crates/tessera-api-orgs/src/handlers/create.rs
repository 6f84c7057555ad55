//! Create handler for new organizations.

use axum::{extract::State, http::StatusCode, Json};

use crate::error::{ErrorResponse, OrgError};
use crate::models::{CreateOrgRequest, OrgResponse};
use crate::router::OrgAppState;

/// POST /orgs
///
/// Create an organization together with its administrator account and its
/// isolated data partition.
#[utoipa::path(
    post,
    path = "/orgs",
    request_body = CreateOrgRequest,
    responses(
        (status = 201, description = "Organization created", body = OrgResponse),
        (status = 400, description = "Validation error or name/email conflict", body = ErrorResponse),
        (status = 503, description = "Storage temporarily unavailable", body = ErrorResponse),
    ),
    tag = "Organizations"
)]
pub async fn create_org_handler(
    State(state): State<OrgAppState>,
    Json(request): Json<CreateOrgRequest>,
) -> Result<(StatusCode, Json<OrgResponse>), OrgError> {
    if let Some(error) = request.validate() {
        return Err(OrgError::Validation(error));
    }

    let tenant = state
        .service
        .create(&request.name, &request.admin_email, &request.admin_password)
        .await?;

    Ok((StatusCode::CREATED, Json(tenant.into())))
}
