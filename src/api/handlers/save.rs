//! Handler for the save endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use tracing::info;

use crate::api::dto::save::{SaveRequest, SaveResponse};
use crate::application::services::SaveOutcome;
use crate::error::AppError;
use crate::state::AppState;

const MSG_INVALID_JSON: &str = "invalid json";

/// Shortens a URL.
///
/// # Endpoint
///
/// `POST /url`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/page", "alias": "abc123" }
/// ```
///
/// `alias` is optional; when it is missing or blank the server generates one.
///
/// # Response Codes
///
/// - **201 Created**: stored on the first insert
/// - **200 OK**: a generated alias committed after collisions, or the URL was
///   already stored and the existing alias is returned
/// - **400 / 409 / 500**: see [`AppError`]
pub async fn save_handler(
    State(state): State<AppState>,
    payload: Result<Json<SaveRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<SaveResponse>), AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        info!(error = %rejection, "rejected save request body");
        AppError::bad_request(MSG_INVALID_JSON)
    })?;

    let saved = state
        .link_service
        .save(&payload.url, payload.alias.as_deref())
        .await?;

    let status = match saved.outcome {
        SaveOutcome::Created => StatusCode::CREATED,
        SaveOutcome::CreatedAfterRetry | SaveOutcome::Existing => StatusCode::OK,
    };

    Ok((status, Json(SaveResponse::new(saved.alias))))
}
