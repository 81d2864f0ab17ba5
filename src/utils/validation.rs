//! Input validation for submitted URLs and aliases.
//!
//! All checks are pure functions over the immutable rules captured by
//! [`Validator`] at startup.

use regex::Regex;
use std::sync::LazyLock;
use url::Url;

use crate::config::Config;

/// Compiled regex for alias validation.
static ALIAS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").unwrap());

/// Aliases that would be shadowed by static routes.
pub const RESERVED_ALIASES: &[&str] = &["url", "health", "admin"];

/// Reasons a submitted URL is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum UrlValidationError {
    #[error("url is required")]
    Required,

    #[error("url is longer than {max} characters")]
    TooLong { max: usize },

    #[error("invalid url")]
    Invalid,

    #[error("user info in url is not allowed")]
    UserInfoNotAllowed,

    #[error("url points at this service")]
    SelfReferential,
}

/// Reasons a submitted alias is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AliasValidationError {
    #[error("alias is shorter than {min} characters")]
    TooShort { min: usize, max: usize },

    #[error("alias is longer than {max} characters")]
    TooLong { min: usize, max: usize },

    #[error("alias contains characters outside [A-Za-z0-9_-]")]
    InvalidFormat,

    #[error("alias is reserved")]
    Reserved,
}

/// URL and alias rules loaded once from configuration.
#[derive(Debug, Clone)]
pub struct Validator {
    own_host: String,
    max_url_len: usize,
    min_alias_len: usize,
    max_alias_len: usize,
}

impl Validator {
    /// Creates a validator.
    ///
    /// `own_host` is normalized here (trimmed, lowercased, trailing dot
    /// removed); an empty value disables the self-reference check.
    pub fn new(
        own_host: &str,
        max_url_len: usize,
        min_alias_len: usize,
        max_alias_len: usize,
    ) -> Self {
        Self {
            own_host: normalize_host(own_host.trim()),
            max_url_len,
            min_alias_len,
            max_alias_len,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            &config.own_host,
            config.max_url_len,
            config.min_alias_len,
            config.max_alias_len,
        )
    }

    /// Validates a candidate long URL.
    ///
    /// # Rules
    ///
    /// - Must not be blank
    /// - At most `max_url_len` bytes
    /// - No control characters (the URL parser would silently drop them)
    /// - Absolute `http`/`https` URL with a non-empty host
    /// - No embedded credentials
    /// - No empty host labels (`example..com`, `.example.com`)
    /// - Host must differ from the service's own host (port and trailing dot ignored)
    ///
    /// # Errors
    ///
    /// Returns the specific [`UrlValidationError`] for the first rule violated.
    pub fn validate_url(&self, candidate: &str) -> Result<(), UrlValidationError> {
        if candidate.trim().is_empty() {
            return Err(UrlValidationError::Required);
        }

        if candidate.len() > self.max_url_len {
            return Err(UrlValidationError::TooLong {
                max: self.max_url_len,
            });
        }

        if candidate.chars().any(char::is_control) {
            return Err(UrlValidationError::Invalid);
        }

        let url = Url::parse(candidate).map_err(|_| UrlValidationError::Invalid)?;

        if !url.username().is_empty() || url.password().is_some() {
            return Err(UrlValidationError::UserInfoNotAllowed);
        }

        if !matches!(url.scheme(), "http" | "https") {
            return Err(UrlValidationError::Invalid);
        }

        let host = match url.host_str() {
            Some(host) if !host.is_empty() => normalize_host(host),
            _ => return Err(UrlValidationError::Invalid),
        };

        if host.is_empty() || host.starts_with('.') || host.contains("..") {
            return Err(UrlValidationError::Invalid);
        }

        if !self.own_host.is_empty() && host == self.own_host {
            return Err(UrlValidationError::SelfReferential);
        }

        Ok(())
    }

    /// Validates a client-supplied alias.
    ///
    /// Length bounds are inclusive. The character set check is an anchored
    /// full-string match.
    pub fn validate_alias(&self, candidate: &str) -> Result<(), AliasValidationError> {
        let len = candidate.len();

        if len < self.min_alias_len {
            return Err(AliasValidationError::TooShort {
                min: self.min_alias_len,
                max: self.max_alias_len,
            });
        }

        if len > self.max_alias_len {
            return Err(AliasValidationError::TooLong {
                min: self.min_alias_len,
                max: self.max_alias_len,
            });
        }

        if !ALIAS_REGEX.is_match(candidate) {
            return Err(AliasValidationError::InvalidFormat);
        }

        if RESERVED_ALIASES.contains(&candidate) {
            return Err(AliasValidationError::Reserved);
        }

        Ok(())
    }
}

fn normalize_host(host: &str) -> String {
    host.strip_suffix('.').unwrap_or(host).to_ascii_lowercase()
}
