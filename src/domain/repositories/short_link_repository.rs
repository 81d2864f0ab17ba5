//! Repository trait for short link data access.

use crate::domain::entities::{NewShortLink, ShortLink};
use async_trait::async_trait;

/// Storage-level failures, classified so callers can pick a retry policy.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Unique constraint on `alias` rejected the insert.
    #[error("alias already exists")]
    AliasExists,

    /// Unique constraint on `original_url` rejected the insert.
    #[error("url already exists")]
    UrlExists,

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Repository interface for short links.
///
/// The store is the only arbiter of uniqueness: [`ShortLinkRepository::insert`]
/// must check and create in one atomic operation so that concurrent writers
/// racing on the same alias are resolved by the store itself.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgShortLinkRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryShortLinkRepository`] - in-process fake
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShortLinkRepository: Send + Sync {
    /// Inserts a new short link and returns its surrogate id.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::AliasExists`] or [`StorageError::UrlExists`]
    /// depending on which unique constraint was violated.
    ///
    /// Returns [`StorageError::Database`] on any other database error.
    async fn insert(&self, new_link: NewShortLink) -> Result<i64, StorageError>;

    /// Returns the original URL stored under `alias`, if any.
    async fn find_url(&self, alias: &str) -> Result<Option<String>, StorageError>;

    /// Finds the link that already owns `original_url`.
    async fn find_by_url(&self, original_url: &str) -> Result<Option<ShortLink>, StorageError>;

    /// Hard-deletes the link stored under `alias`.
    ///
    /// Returns `Ok(false)` when no row matched.
    async fn delete(&self, alias: &str) -> Result<bool, StorageError>;

    /// Checks that the store is reachable.
    async fn ping(&self) -> Result<(), StorageError>;
}
