//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{AdminAuthService, LinkService, SaveSettings};
use crate::config::Config;
use crate::domain::repositories::ShortLinkRepository;
use crate::utils::validation::Validator;

/// Handles to the services, cheap to clone per request.
///
/// Holds no mutable state of its own; all write serialization happens in
/// the store behind the repository.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<dyn ShortLinkRepository>>,
    pub admin_auth: Arc<AdminAuthService>,
}

impl AppState {
    /// Builds the services from the startup configuration.
    pub fn new(repository: Arc<dyn ShortLinkRepository>, config: &Config) -> Self {
        let link_service = LinkService::new(
            repository,
            Validator::from_config(config),
            SaveSettings::from_config(config),
        );

        Self {
            link_service: Arc::new(link_service),
            admin_auth: Arc::new(AdminAuthService::from_config(config)),
        }
    }
}
