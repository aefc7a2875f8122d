//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::IntoResponse,
};
use serde_json::Value;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects an alias to its target URL.
///
/// # Endpoint
///
/// `GET /{alias}`
///
/// Responds with `302 Found` and a `Location` header. No authentication.
///
/// # Errors
///
/// Returns 404 Not Found if the alias doesn't exist.
pub async fn redirect_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let target = state.link_service.resolve(&alias).await?;

    let location = HeaderValue::try_from(target.as_str()).map_err(|e| {
        tracing::error!(%alias, error = %e, "stored target is not a valid Location header");
        AppError::internal("Stored target URL is invalid", Value::Null)
    })?;

    tracing::debug!(%alias, %target, "redirecting");

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]))
}
