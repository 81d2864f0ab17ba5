//! HTTP Basic authentication middleware for admin routes.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBasic;

use crate::{error::AppError, state::AppState};

/// Authenticates requests using HTTP Basic credentials.
///
/// # Header Format
///
/// ```text
/// Authorization: Basic <base64(user:password)>
/// ```
///
/// # Errors
///
/// Returns `401 Unauthorized` with `WWW-Authenticate: Basic` if the header is
/// missing, malformed, or the credentials do not match the configured admin
/// account.
///
/// # Example
///
/// ```rust,ignore
/// use axum::{Router, routing::delete, middleware};
/// use crate::api::middleware::admin_auth;
///
/// let admin = Router::new()
///     .route("/{alias}", delete(delete_handler))
///     .route_layer(middleware::from_fn_with_state(state.clone(), admin_auth::layer));
/// ```
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let AuthBasic((user, password)) = AuthBasic::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| AppError::unauthorized())?;

    st.admin_auth.authenticate(&user, password.as_deref())?;

    let req = Request::from_parts(parts, body);

    Ok(next.run(req).await)
}
