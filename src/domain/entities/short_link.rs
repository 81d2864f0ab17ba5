//! ShortLink entity representing a committed alias → URL mapping.

use chrono::{DateTime, Utc};

/// A persisted alias → URL mapping.
///
/// Rows are immutable once committed; the only lifecycle transition after
/// insert is a hard delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortLink {
    pub id: i64,
    pub alias: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
}

impl ShortLink {
    /// Creates a new ShortLink instance.
    pub fn new(id: i64, alias: String, original_url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            alias,
            original_url,
            created_at,
        }
    }
}

/// Input data for inserting a new short link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShortLink {
    pub alias: String,
    pub original_url: String,
}

impl NewShortLink {
    pub fn new(alias: impl Into<String>, original_url: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            original_url: original_url.into(),
        }
    }
}
