//! Request and response models for the organization lifecycle API.

pub mod auth;
pub mod org;

pub use auth::{LoginRequest, TokenResponse};
pub use org::{CreateOrgRequest, OrgResponse, RenameOrgRequest};
