#![allow(dead_code)]

use alias_shortener::application::services::DuplicateUrlPolicy;
use alias_shortener::config::Config;
use alias_shortener::domain::entities::{NewShortLink, ShortLink};
use alias_shortener::domain::repositories::{ShortLinkRepository, StorageError};
use alias_shortener::infrastructure::persistence::InMemoryShortLinkRepository;
use alias_shortener::routes;
use alias_shortener::state::AppState;
use async_trait::async_trait;
use axum::Router;
use axum_test::TestServer;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

pub const ADMIN_USER: &str = "admin";
pub const ADMIN_PASSWORD: &str = "secret";
/// `Basic base64("admin:secret")`
pub const ADMIN_AUTHORIZATION: &str = "Basic YWRtaW46c2VjcmV0";
pub const OWN_HOST: &str = "short.test";

pub fn test_config() -> Config {
    Config {
        database_url: "postgres://localhost/test".to_string(),
        listen_addr: "127.0.0.1:0".to_string(),
        log_level: "info".to_string(),
        log_format: "text".to_string(),
        own_host: OWN_HOST.to_string(),
        max_url_len: 2048,
        min_alias_len: 3,
        max_alias_len: 32,
        default_alias_len: 8,
        duplicate_url_policy: DuplicateUrlPolicy::Reject,
        request_timeout: 10,
        db_statement_timeout: 5,
        db_max_connections: 10,
        db_connect_timeout: 30,
        db_idle_timeout: 600,
        db_max_lifetime: 1800,
        admin_user: ADMIN_USER.to_string(),
        admin_password: ADMIN_PASSWORD.to_string(),
    }
}

pub fn create_test_state(config: &Config) -> (AppState, Arc<InMemoryShortLinkRepository>) {
    let repository = Arc::new(InMemoryShortLinkRepository::new());
    let state = AppState::new(repository.clone(), config);

    (state, repository)
}

pub fn create_test_router(config: &Config) -> (Router, Arc<InMemoryShortLinkRepository>) {
    let (state, repository) = create_test_state(config);
    let router = routes::router(state, Duration::from_secs(config.request_timeout));

    (router, repository)
}

pub fn create_test_server(config: &Config) -> (TestServer, Arc<InMemoryShortLinkRepository>) {
    let (router, repository) = create_test_router(config);

    (TestServer::new(router).unwrap(), repository)
}

/// Repository whose every call fails as if the database were down.
pub struct UnavailableRepository;

fn unavailable() -> StorageError {
    StorageError::Database(sqlx::Error::PoolTimedOut)
}

#[async_trait]
impl ShortLinkRepository for UnavailableRepository {
    async fn insert(&self, _new_link: NewShortLink) -> Result<i64, StorageError> {
        Err(unavailable())
    }

    async fn find_url(&self, _alias: &str) -> Result<Option<String>, StorageError> {
        Err(unavailable())
    }

    async fn find_by_url(&self, _original_url: &str) -> Result<Option<ShortLink>, StorageError> {
        Err(unavailable())
    }

    async fn delete(&self, _alias: &str) -> Result<bool, StorageError> {
        Err(unavailable())
    }

    async fn ping(&self) -> Result<(), StorageError> {
        Err(unavailable())
    }
}

/// Reports an alias collision for the first `collisions` inserts, then
/// stores through an in-memory repository.
pub struct CollidingRepository {
    remaining: AtomicUsize,
    inner: InMemoryShortLinkRepository,
}

impl CollidingRepository {
    pub fn new(collisions: usize) -> Self {
        Self {
            remaining: AtomicUsize::new(collisions),
            inner: InMemoryShortLinkRepository::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

#[async_trait]
impl ShortLinkRepository for CollidingRepository {
    async fn insert(&self, new_link: NewShortLink) -> Result<i64, StorageError> {
        let collide = self
            .remaining
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();

        if collide {
            return Err(StorageError::AliasExists);
        }
        self.inner.insert(new_link).await
    }

    async fn find_url(&self, alias: &str) -> Result<Option<String>, StorageError> {
        self.inner.find_url(alias).await
    }

    async fn find_by_url(&self, original_url: &str) -> Result<Option<ShortLink>, StorageError> {
        self.inner.find_by_url(original_url).await
    }

    async fn delete(&self, alias: &str) -> Result<bool, StorageError> {
        self.inner.delete(alias).await
    }

    async fn ping(&self) -> Result<(), StorageError> {
        self.inner.ping().await
    }
}
