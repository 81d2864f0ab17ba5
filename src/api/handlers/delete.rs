//! Handler for removing a short link.

use axum::{
    extract::{Path, State},
    http::StatusCode,
};

use crate::error::AppError;
use crate::state::AppState;

/// Deletes the link stored under `alias`.
///
/// # Endpoint
///
/// `DELETE /admin/{alias}` (HTTP Basic auth required)
///
/// # Response Codes
///
/// - **204 No Content**: deleted
/// - **400 Bad Request**: malformed alias
/// - **404 Not Found**: nothing stored under the alias
pub async fn delete_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.link_service.delete(&alias).await?;

    Ok(StatusCode::NO_CONTENT)
}
