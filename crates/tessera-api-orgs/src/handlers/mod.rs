//! HTTP handlers for the organization lifecycle API.

pub mod create;
pub mod delete;
pub mod get;
pub mod login;
pub mod rename;

pub use create::create_org_handler;
pub use delete::delete_org_handler;
pub use get::get_org_handler;
pub use login::login_handler;
pub use rename::rename_org_handler;
