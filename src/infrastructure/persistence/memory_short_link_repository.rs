//! In-process implementation of the short link repository.
//!
//! Used by the HTTP test-suite. Uniqueness is enforced under a single lock
//! so an insert is as atomic as the PostgreSQL one.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::domain::entities::{NewShortLink, ShortLink};
use crate::domain::repositories::{ShortLinkRepository, StorageError};

#[derive(Default)]
struct Tables {
    next_id: i64,
    by_alias: HashMap<String, ShortLink>,
    alias_by_url: HashMap<String, String>,
}

/// Short link repository backed by two hash maps.
#[derive(Default)]
pub struct InMemoryShortLinkRepository {
    tables: Mutex<Tables>,
}

impl InMemoryShortLinkRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored links.
    pub fn len(&self) -> usize {
        self.lock().by_alias.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl ShortLinkRepository for InMemoryShortLinkRepository {
    async fn insert(&self, new_link: NewShortLink) -> Result<i64, StorageError> {
        let mut tables = self.lock();

        if tables.by_alias.contains_key(&new_link.alias) {
            return Err(StorageError::AliasExists);
        }
        if tables.alias_by_url.contains_key(&new_link.original_url) {
            return Err(StorageError::UrlExists);
        }

        tables.next_id += 1;
        let id = tables.next_id;

        tables
            .alias_by_url
            .insert(new_link.original_url.clone(), new_link.alias.clone());
        tables.by_alias.insert(
            new_link.alias.clone(),
            ShortLink::new(id, new_link.alias, new_link.original_url, Utc::now()),
        );

        Ok(id)
    }

    async fn find_url(&self, alias: &str) -> Result<Option<String>, StorageError> {
        Ok(self
            .lock()
            .by_alias
            .get(alias)
            .map(|link| link.original_url.clone()))
    }

    async fn find_by_url(&self, original_url: &str) -> Result<Option<ShortLink>, StorageError> {
        let tables = self.lock();

        Ok(tables
            .alias_by_url
            .get(original_url)
            .and_then(|alias| tables.by_alias.get(alias))
            .cloned())
    }

    async fn delete(&self, alias: &str) -> Result<bool, StorageError> {
        let mut tables = self.lock();

        match tables.by_alias.remove(alias) {
            Some(link) => {
                tables.alias_by_url.remove(&link.original_url);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn ping(&self) -> Result<(), StorageError> {
        Ok(())
    }
}
