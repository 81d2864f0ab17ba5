//! API route configuration.

use crate::api::handlers::{delete_handler, save_handler};
use crate::api::middleware::admin_auth;
use crate::state::AppState;
use axum::{
    Router, middleware,
    routing::{delete, post},
};

/// Public routes.
///
/// # Endpoints
///
/// - `POST /url` - Shorten a URL
pub fn public_routes() -> Router<AppState> {
    Router::new().route("/url", post(save_handler))
}

/// Admin routes, protected by HTTP Basic authentication.
///
/// # Endpoints
///
/// - `DELETE /{alias}` - Remove a short link
pub fn admin_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/{alias}", delete(delete_handler))
        .route_layer(middleware::from_fn_with_state(state, admin_auth::layer))
}
