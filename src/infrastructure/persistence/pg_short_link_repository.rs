//! PostgreSQL implementation of the short link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewShortLink, ShortLink};
use crate::domain::repositories::{ShortLinkRepository, StorageError};
use crate::utils::db_error::classify_insert_error;

/// PostgreSQL repository for short link storage and retrieval.
///
/// Inserts rely on the `short_links_alias_key` and
/// `short_links_original_url_key` unique constraints; there is never a
/// separate existence check before writing.
pub struct PgShortLinkRepository {
    pool: Arc<PgPool>,
}

impl PgShortLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ShortLinkRow {
    id: i64,
    alias: String,
    original_url: String,
    created_at: DateTime<Utc>,
}

impl From<ShortLinkRow> for ShortLink {
    fn from(row: ShortLinkRow) -> Self {
        ShortLink::new(row.id, row.alias, row.original_url, row.created_at)
    }
}

#[async_trait]
impl ShortLinkRepository for PgShortLinkRepository {
    async fn insert(&self, new_link: NewShortLink) -> Result<i64, StorageError> {
        sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO short_links (alias, original_url)
            VALUES ($1, $2)
            RETURNING id
            "#,
        )
        .bind(&new_link.alias)
        .bind(&new_link.original_url)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(classify_insert_error)
    }

    async fn find_url(&self, alias: &str) -> Result<Option<String>, StorageError> {
        let url = sqlx::query_scalar::<_, String>(
            "SELECT original_url FROM short_links WHERE alias = $1",
        )
        .bind(alias)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(url)
    }

    async fn find_by_url(&self, original_url: &str) -> Result<Option<ShortLink>, StorageError> {
        let row = sqlx::query_as::<_, ShortLinkRow>(
            r#"
            SELECT id, alias, original_url, created_at
            FROM short_links
            WHERE original_url = $1
            "#,
        )
        .bind(original_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(ShortLink::from))
    }

    async fn delete(&self, alias: &str) -> Result<bool, StorageError> {
        let result = sqlx::query("DELETE FROM short_links WHERE alias = $1")
            .bind(alias)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), StorageError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}
