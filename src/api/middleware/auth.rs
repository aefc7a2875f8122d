//! Bearer token access gate.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBearer;

use crate::{error::AppError, state::AppState};

/// Lets a request through only if it carries a valid access token.
///
/// # Header Format
///
/// ```text
/// Authorization: Bearer <token>
/// ```
///
/// # Flow
///
/// 1. Extract token from `Authorization` header
/// 2. Verify signature and expiry
/// 3. Forward the request unchanged
///
/// The gate only answers "is this a valid token"; it does not attach the
/// caller's identity to the request.
///
/// # Errors
///
/// Returns `401 Unauthorized` (with `WWW-Authenticate: Bearer`) if:
/// - Authorization header is missing
/// - The scheme is not `Bearer`
/// - The token is malformed, forged or expired
///
/// # Example
///
/// ```rust,ignore
/// use axum::{Router, routing::post, middleware};
/// use crate::api::middleware::auth;
///
/// let protected = Router::new()
///     .route("/url", post(save_link_handler))
///     .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));
/// ```
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let AuthBearer(token) = AuthBearer::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| {
            tracing::warn!(uri = %parts.uri, "missing or malformed Authorization header");
            AppError::unauthorized(
                "Unauthorized",
                serde_json::json!({"reason": "Authorization header is missing or invalid"}),
            )
        })?;

    if let Err(e) = st.token_service.verify(&token) {
        tracing::warn!(uri = %parts.uri, error = ?e, "access token rejected");
        return Err(e);
    }

    let req = Request::from_parts(parts, body);

    Ok(next.run(req).await)
}
