//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::IntoResponse,
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects an alias to its original URL.
///
/// # Endpoint
///
/// `GET /{alias}`
///
/// # Errors
///
/// Returns 400 Bad Request for a malformed alias and 404 Not Found if
/// nothing is stored under it. A stored URL that is not a valid header value
/// yields 500.
pub async fn redirect_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let url = state.link_service.resolve(&alias).await?;

    let location = HeaderValue::try_from(url).map_err(|e| {
        tracing::error!(alias = %alias, error = %e, "stored url is not a valid Location header");
        AppError::internal()
    })?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]))
}
