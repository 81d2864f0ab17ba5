//! Business logic services for the application layer.

pub mod admin_auth_service;
pub mod link_service;

pub use admin_auth_service::AdminAuthService;
pub use link_service::{
    DuplicateUrlPolicy, LinkError, LinkService, MAX_ALIAS_ATTEMPTS, SaveOutcome, SaveSettings,
    SavedLink,
};
