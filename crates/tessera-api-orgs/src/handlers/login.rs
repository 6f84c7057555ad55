//! Administrator login handler.

use axum::{extract::State, Json};

use crate::error::{ErrorResponse, OrgError};
use crate::models::{LoginRequest, TokenResponse};
use crate::router::OrgAppState;

/// POST /auth/login
///
/// Authenticate an administrator and issue a bearer token scoped to their
/// organization. Unknown email and wrong password produce an identical 401.
#[utoipa::path(
    post,
    path = "/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Token issued", body = TokenResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
    ),
    tag = "Authentication"
)]
pub async fn login_handler(
    State(state): State<OrgAppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, OrgError> {
    if let Some(error) = request.validate() {
        return Err(OrgError::Validation(error));
    }

    let token = state
        .service
        .authenticate(&request.email, &request.password)
        .await?;

    Ok(Json(TokenResponse::bearer(token)))
}
