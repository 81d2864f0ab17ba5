//! Classification of PostgreSQL insert failures.

use crate::domain::repositories::StorageError;

/// Unique constraint on `short_links.alias`.
pub const ALIAS_UNIQUE_CONSTRAINT: &str = "short_links_alias_key";

/// Unique constraint on `short_links.original_url`.
pub const URL_UNIQUE_CONSTRAINT: &str = "short_links_original_url_key";

/// Maps a failed insert onto the storage error taxonomy.
///
/// Unique violations are told apart by constraint name; anything else,
/// including unique violations on unknown constraints, stays a database error.
pub fn classify_insert_error(e: sqlx::Error) -> StorageError {
    let Some(db_err) = e.as_database_error() else {
        return StorageError::Database(e);
    };

    if !db_err.is_unique_violation() {
        return StorageError::Database(e);
    }

    match db_err.constraint() {
        Some(ALIAS_UNIQUE_CONSTRAINT) => StorageError::AliasExists,
        Some(URL_UNIQUE_CONSTRAINT) => StorageError::UrlExists,
        _ => StorageError::Database(e),
    }
}
