//! Client-facing error type and the mapping from internal failures.
//!
//! [`AppError`] is the only error rendered to HTTP clients. Every body has the
//! shape `{"status": "Error", "error": "<message>"}`; storage and exhaustion
//! failures are logged with full context here and rendered with a generic
//! message so no internal text reaches the caller.

use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::application::services::LinkError;
use crate::utils::validation::{AliasValidationError, UrlValidationError};

const MSG_URL_REQUIRED: &str = "url is required";
const MSG_USER_INFO: &str = "userinfo in url is not allowed";
const MSG_SELF_REFERENTIAL: &str = "cannot shorten our own url";
const MSG_INVALID_URL: &str = "invalid url";
const MSG_INVALID_ALIAS: &str = "alias may contain only letters, digits, '_' and '-'";
const MSG_ALIAS_RESERVED: &str = "alias is reserved";
const MSG_ALIAS_EXISTS: &str = "alias already exists";
const MSG_URL_EXISTS: &str = "url already exists";
const MSG_NOT_FOUND: &str = "alias not found";
const MSG_UNAUTHORIZED: &str = "unauthorized";
const MSG_INTERNAL: &str = "internal server error";

/// Status envelope shared by success and error bodies.
#[derive(Debug, Serialize)]
pub struct StatusBody {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl StatusBody {
    pub fn ok() -> Self {
        Self {
            status: "OK",
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: "Error",
            error: Some(message.into()),
        }
    }
}

#[derive(Debug)]
pub enum AppError {
    Validation { message: String },
    Unauthorized,
    NotFound { message: String },
    Conflict { message: String },
    Internal,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
    pub fn unauthorized() -> Self {
        Self::Unauthorized
    }
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }
    pub fn internal() -> Self {
        Self::Internal
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            AppError::Validation { message }
            | AppError::NotFound { message }
            | AppError::Conflict { message } => message.as_str(),
            AppError::Unauthorized => MSG_UNAUTHORIZED,
            AppError::Internal => MSG_INTERNAL,
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message(), self.status())
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let mut response = (status, Json(StatusBody::error(self.message()))).into_response();

        if status == StatusCode::UNAUTHORIZED {
            response.headers_mut().insert(
                header::WWW_AUTHENTICATE,
                HeaderValue::from_static(r#"Basic realm="alias-shortener""#),
            );
        }

        response
    }
}

impl From<UrlValidationError> for AppError {
    fn from(e: UrlValidationError) -> Self {
        let message = match e {
            UrlValidationError::Required => MSG_URL_REQUIRED.to_string(),
            UrlValidationError::TooLong { max } => {
                format!("url length must be <= {max} characters")
            }
            UrlValidationError::UserInfoNotAllowed => MSG_USER_INFO.to_string(),
            UrlValidationError::SelfReferential => MSG_SELF_REFERENTIAL.to_string(),
            UrlValidationError::Invalid => MSG_INVALID_URL.to_string(),
        };
        AppError::bad_request(message)
    }
}

impl From<AliasValidationError> for AppError {
    fn from(e: AliasValidationError) -> Self {
        match e {
            AliasValidationError::TooShort { min, max }
            | AliasValidationError::TooLong { min, max } => AppError::bad_request(format!(
                "alias length must be between {min} and {max} characters"
            )),
            AliasValidationError::InvalidFormat => AppError::bad_request(MSG_INVALID_ALIAS),
            AliasValidationError::Reserved => AppError::bad_request(MSG_ALIAS_RESERVED),
        }
    }
}

impl From<LinkError> for AppError {
    fn from(e: LinkError) -> Self {
        if !matches!(
            e,
            LinkError::AliasGenerationFailed { .. } | LinkError::Storage(_)
        ) {
            tracing::info!(error = %e, "request rejected");
        }

        match e {
            LinkError::InvalidUrl(e) => e.into(),
            LinkError::InvalidAlias(e) => e.into(),
            LinkError::AliasExists => AppError::conflict(MSG_ALIAS_EXISTS),
            LinkError::UrlExists => AppError::conflict(MSG_URL_EXISTS),
            LinkError::NotFound => AppError::not_found(MSG_NOT_FOUND),
            LinkError::AliasGenerationFailed { attempts } => {
                tracing::error!(attempts, "alias generation exhausted");
                AppError::internal()
            }
            LinkError::Storage(e) => {
                tracing::error!(error = ?e, "storage failure");
                AppError::internal()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::StorageError;

    #[test]
    fn test_url_validation_messages() {
        let cases = [
            (UrlValidationError::Required, "url is required"),
            (
                UrlValidationError::TooLong { max: 2048 },
                "url length must be <= 2048 characters",
            ),
            (
                UrlValidationError::UserInfoNotAllowed,
                "userinfo in url is not allowed",
            ),
            (
                UrlValidationError::SelfReferential,
                "cannot shorten our own url",
            ),
            (UrlValidationError::Invalid, "invalid url"),
        ];

        for (err, expected) in cases {
            let app_err = AppError::from(err);
            assert_eq!(app_err.status(), StatusCode::BAD_REQUEST);
            assert_eq!(app_err.message(), expected);
        }
    }

    #[test]
    fn test_alias_length_message_names_bounds() {
        let app_err = AppError::from(AliasValidationError::TooShort { min: 3, max: 10 });

        assert_eq!(
            app_err.message(),
            "alias length must be between 3 and 10 characters"
        );
    }

    #[test]
    fn test_link_error_status_mapping() {
        assert_eq!(
            AppError::from(LinkError::AliasExists).status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::from(LinkError::UrlExists).status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::from(LinkError::NotFound).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::from(LinkError::AliasGenerationFailed { attempts: 10 }).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_storage_error_text_is_not_leaked() {
        let app_err = AppError::from(LinkError::Storage(StorageError::Database(
            sqlx::Error::Protocol("connection reset by peer at 10.0.0.5".to_string()),
        )));

        assert_eq!(app_err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(app_err.message(), "internal server error");
    }

    #[test]
    fn test_unauthorized_sets_challenge_header() {
        let response = AppError::unauthorized().into_response();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert!(response.headers().contains_key(header::WWW_AUTHENTICATE));
    }
}
