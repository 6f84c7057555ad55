//! Router configuration for the organization lifecycle API.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tessera_auth::TokenService;

use crate::handlers::{
    create_org_handler, delete_org_handler, get_org_handler, login_handler, rename_org_handler,
};
use crate::services::OrgService;

/// Application state for the lifecycle routes.
#[derive(Clone)]
pub struct OrgAppState {
    /// The lifecycle orchestrator.
    pub service: Arc<OrgService>,
    /// Token service used by the bearer-auth extractor.
    pub tokens: TokenService,
}

impl OrgAppState {
    /// Build the state around an orchestrator, sharing its token service.
    #[must_use]
    pub fn new(service: Arc<OrgService>) -> Self {
        let tokens = service.tokens().clone();
        Self { service, tokens }
    }
}

/// Create the organization lifecycle router.
///
/// Provides:
/// - `POST /` - create an organization (201)
/// - `GET /:name` - look up an organization (200)
/// - `PUT /:name` - rename an organization (200, bearer token required)
/// - `DELETE /:name` - delete an organization (204, bearer token required)
///
/// The app nests this under `/orgs`.
pub fn org_router(state: OrgAppState) -> Router {
    Router::new()
        .route("/", post(create_org_handler))
        .route(
            "/:name",
            get(get_org_handler)
                .put(rename_org_handler)
                .delete(delete_org_handler),
        )
        .with_state(state)
}

/// Create the administrator authentication router.
///
/// Provides:
/// - `POST /login` - authenticate and receive a tenant-scoped bearer token
///
/// The app nests this under `/auth`.
pub fn auth_router(state: OrgAppState) -> Router {
    Router::new()
        .route("/login", post(login_handler))
        .with_state(state)
}
