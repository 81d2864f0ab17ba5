//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST   /url`            - Shorten a URL (public)
//! - `GET    /{alias}`        - Redirect to the stored URL (public)
//! - `GET    /health`         - Health check (public)
//! - `DELETE /admin/{alias}`  - Remove a short link (HTTP Basic auth)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Timeout** - Requests exceeding the configured limit get `408`
//! - **Authentication** - HTTP Basic on `/admin/*`
//! - **Path normalization** - Trailing slash handling

use std::time::Duration;

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::timeout::TimeoutLayer;

/// Builds the router with every route and per-request middleware.
///
/// Path normalization is applied by [`app_router`], since it has to wrap the
/// router from the outside to run before routing.
pub fn router(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        .route("/{alias}", get(redirect_handler))
        .route("/health", get(health_handler))
        .merge(api::routes::public_routes())
        .nest("/admin", api::routes::admin_routes(state.clone()))
        .with_state(state)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .layer(tracing::layer())
}

/// Constructs the application service with trailing-slash normalization.
pub fn app_router(state: AppState, request_timeout: Duration) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state, request_timeout))
}
