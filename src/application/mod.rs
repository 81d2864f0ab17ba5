//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Alias allocation, lookup and deletion
//! - [`services::admin_auth_service::AdminAuthService`] - Admin credential checks
pub mod services;
