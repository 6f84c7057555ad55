//! OpenAPI document for the organization-management API.

use axum::Json;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// Merged OpenAPI document covering every lifecycle route.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "tessera organization API",
        description = "Multi-tenant organization management: per-tenant data partitions, administrator credentials, and tenant-scoped bearer tokens."
    ),
    paths(
        tessera_api_orgs::handlers::create::create_org_handler,
        tessera_api_orgs::handlers::get::get_org_handler,
        tessera_api_orgs::handlers::login::login_handler,
        tessera_api_orgs::handlers::delete::delete_org_handler,
        tessera_api_orgs::handlers::rename::rename_org_handler,
    ),
    components(schemas(
        tessera_api_orgs::models::CreateOrgRequest,
        tessera_api_orgs::models::RenameOrgRequest,
        tessera_api_orgs::models::OrgResponse,
        tessera_api_orgs::models::LoginRequest,
        tessera_api_orgs::models::TokenResponse,
        tessera_api_orgs::ErrorResponse,
    )),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

/// Registers the bearer scheme referenced by the protected routes.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearerAuth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

/// GET /openapi.json
pub async fn openapi_handler() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
