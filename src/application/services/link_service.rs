//! Alias allocation, lookup and deletion.

use std::str::FromStr;
use std::sync::Arc;

use tracing::{debug, error, info};

use crate::config::Config;
use crate::domain::entities::NewShortLink;
use crate::domain::repositories::{ShortLinkRepository, StorageError};
use crate::utils::alias_generator::{generate_alias, skip_reserved};
use crate::utils::validation::{AliasValidationError, UrlValidationError, Validator};

/// Upper bound on insert attempts for a server-generated alias.
pub const MAX_ALIAS_ATTEMPTS: usize = 10;

/// What to do when the submitted URL is already shortened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicateUrlPolicy {
    /// Fail with [`LinkError::UrlExists`].
    #[default]
    Reject,
    /// Answer with the alias that already owns the URL.
    ReturnExisting,
}

impl FromStr for DuplicateUrlPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reject" => Ok(Self::Reject),
            "return_existing" => Ok(Self::ReturnExisting),
            other => Err(format!(
                "expected 'reject' or 'return_existing', got '{other}'"
            )),
        }
    }
}

/// Settings for the save path, taken from [`Config`] at startup.
#[derive(Debug, Clone, Copy)]
pub struct SaveSettings {
    pub alias_len: usize,
    pub duplicate_url_policy: DuplicateUrlPolicy,
}

impl SaveSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            alias_len: config.default_alias_len,
            duplicate_url_policy: config.duplicate_url_policy,
        }
    }
}

/// How a save request was satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Committed on the first insert.
    Created,
    /// A generated alias committed after one or more collisions.
    CreatedAfterRetry,
    /// The URL was already stored; its existing alias is returned.
    Existing,
}

/// Result of a successful save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedLink {
    pub id: i64,
    pub alias: String,
    /// Number of inserts issued.
    pub attempts: usize,
    pub outcome: SaveOutcome,
}

/// Failures surfaced by [`LinkService`].
#[derive(Debug, thiserror::Error)]
pub enum LinkError {
    #[error(transparent)]
    InvalidUrl(#[from] UrlValidationError),

    #[error(transparent)]
    InvalidAlias(#[from] AliasValidationError),

    #[error("alias already exists")]
    AliasExists,

    #[error("url already exists")]
    UrlExists,

    #[error("alias not found")]
    NotFound,

    #[error("failed to generate a unique alias after {attempts} attempts")]
    AliasGenerationFailed { attempts: usize },

    #[error("storage failure: {0}")]
    Storage(#[source] StorageError),
}

/// Classification of a single insert attempt.
#[derive(Debug)]
enum AttemptOutcome {
    Committed(i64),
    /// The alias is taken; a fresh alias may succeed.
    Collision,
    /// Anything a new alias cannot fix.
    Fatal(StorageError),
}

/// Service for saving, resolving and deleting short links.
///
/// The store's unique constraints are the only arbiter of alias ownership:
/// every save goes straight to an atomic insert and reacts to the
/// classified violation. No existence check precedes the insert.
pub struct LinkService<R: ShortLinkRepository + ?Sized> {
    repository: Arc<R>,
    validator: Validator,
    settings: SaveSettings,
}

impl<R: ShortLinkRepository + ?Sized> LinkService<R> {
    /// Creates a new link service.
    pub fn new(repository: Arc<R>, validator: Validator, settings: SaveSettings) -> Self {
        Self {
            repository,
            validator,
            settings,
        }
    }

    /// Saves `url` under `alias`, or under a generated alias when `alias` is
    /// absent or blank.
    ///
    /// Both inputs are trimmed before validation.
    ///
    /// # Explicit alias
    ///
    /// Exactly one insert is issued. A taken alias fails with
    /// [`LinkError::AliasExists`]; a taken URL fails with
    /// [`LinkError::UrlExists`]. Explicit aliases are never retried.
    ///
    /// # Generated alias
    ///
    /// Up to [`MAX_ALIAS_ATTEMPTS`] inserts, each with a fresh alias. Only
    /// alias collisions are retried.
    ///
    /// # Errors
    ///
    /// - [`LinkError::InvalidUrl`] / [`LinkError::InvalidAlias`] for rejected input
    /// - [`LinkError::AliasExists`] / [`LinkError::UrlExists`] on conflicts
    /// - [`LinkError::AliasGenerationFailed`] when every attempt collided
    /// - [`LinkError::Storage`] on any other storage failure
    pub async fn save(&self, url: &str, alias: Option<&str>) -> Result<SavedLink, LinkError> {
        let url = url.trim();
        self.validator.validate_url(url)?;

        match alias.map(str::trim).filter(|a| !a.is_empty()) {
            Some(alias) => {
                self.validator.validate_alias(alias)?;
                self.save_with_alias(url, alias).await
            }
            None => self.save_with_generated_alias(url).await,
        }
    }

    async fn save_with_alias(&self, url: &str, alias: &str) -> Result<SavedLink, LinkError> {
        match self.attempt_insert(url, alias).await {
            AttemptOutcome::Committed(id) => {
                info!(id, alias, "short link saved");
                Ok(SavedLink {
                    id,
                    alias: alias.to_string(),
                    attempts: 1,
                    outcome: SaveOutcome::Created,
                })
            }
            AttemptOutcome::Collision => Err(LinkError::AliasExists),
            AttemptOutcome::Fatal(StorageError::UrlExists) => Err(LinkError::UrlExists),
            AttemptOutcome::Fatal(e) => Err(LinkError::Storage(e)),
        }
    }

    async fn save_with_generated_alias(&self, url: &str) -> Result<SavedLink, LinkError> {
        for attempt in 1..=MAX_ALIAS_ATTEMPTS {
            let alias = skip_reserved(|| generate_alias(self.settings.alias_len));

            match self.attempt_insert(url, &alias).await {
                AttemptOutcome::Committed(id) => {
                    info!(id, alias = %alias, attempt, "short link saved");
                    let outcome = if attempt == 1 {
                        SaveOutcome::Created
                    } else {
                        SaveOutcome::CreatedAfterRetry
                    };
                    return Ok(SavedLink {
                        id,
                        alias,
                        attempts: attempt,
                        outcome,
                    });
                }
                AttemptOutcome::Collision => {
                    debug!(alias = %alias, attempt, "generated alias collided");
                }
                AttemptOutcome::Fatal(StorageError::UrlExists) => {
                    return self.resolve_duplicate_url(url, attempt).await;
                }
                AttemptOutcome::Fatal(e) => return Err(LinkError::Storage(e)),
            }
        }

        error!(
            url,
            attempts = MAX_ALIAS_ATTEMPTS,
            alias_len = self.settings.alias_len,
            "alias space exhausted; consider raising GENERATE_ALIAS_LEN"
        );
        Err(LinkError::AliasGenerationFailed {
            attempts: MAX_ALIAS_ATTEMPTS,
        })
    }

    async fn attempt_insert(&self, url: &str, alias: &str) -> AttemptOutcome {
        match self.repository.insert(NewShortLink::new(alias, url)).await {
            Ok(id) => AttemptOutcome::Committed(id),
            Err(StorageError::AliasExists) => AttemptOutcome::Collision,
            Err(e) => AttemptOutcome::Fatal(e),
        }
    }

    async fn resolve_duplicate_url(&self, url: &str, attempts: usize) -> Result<SavedLink, LinkError> {
        if self.settings.duplicate_url_policy == DuplicateUrlPolicy::Reject {
            return Err(LinkError::UrlExists);
        }

        // The owning row may have been deleted since the insert failed.
        let existing = self
            .repository
            .find_by_url(url)
            .await
            .map_err(LinkError::Storage)?
            .ok_or(LinkError::UrlExists)?;

        Ok(SavedLink {
            id: existing.id,
            alias: existing.alias,
            attempts,
            outcome: SaveOutcome::Existing,
        })
    }

    /// Returns the URL stored under `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::InvalidAlias`] for a malformed alias,
    /// [`LinkError::NotFound`] if nothing is stored under it, and
    /// [`LinkError::Storage`] on database errors.
    pub async fn resolve(&self, alias: &str) -> Result<String, LinkError> {
        let alias = alias.trim();
        self.validator.validate_alias(alias)?;

        self.repository
            .find_url(alias)
            .await
            .map_err(LinkError::Storage)?
            .ok_or(LinkError::NotFound)
    }

    /// Removes the link stored under `alias`.
    ///
    /// # Errors
    ///
    /// Same as [`Self::resolve`].
    pub async fn delete(&self, alias: &str) -> Result<(), LinkError> {
        let alias = alias.trim();
        self.validator.validate_alias(alias)?;

        let deleted = self
            .repository
            .delete(alias)
            .await
            .map_err(LinkError::Storage)?;

        if !deleted {
            return Err(LinkError::NotFound);
        }

        info!(alias, "short link deleted");
        Ok(())
    }

    /// Checks that the backing store answers.
    pub async fn ping(&self) -> Result<(), LinkError> {
        self.repository.ping().await.map_err(LinkError::Storage)
    }
}
