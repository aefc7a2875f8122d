//! Handlers for link management endpoints (create, delete).

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use validator::Validate;

use crate::api::dto::envelope::{Empty, Envelope};
use crate::api::dto::links::{SaveLinkRequest, SaveLinkResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link.
///
/// # Endpoint
///
/// `POST /url` (Bearer token required)
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/some/long/path", "alias": "promo" }
/// ```
///
/// `alias` is optional; an absent or empty alias is generated.
///
/// # Response
///
/// ```json
/// { "status": "OK", "alias": "promo" }
/// ```
///
/// # Errors
///
/// - 400 Bad Request: malformed body or invalid URL
/// - 409 Conflict: supplied alias already exists
pub async fn save_link_handler(
    State(state): State<AppState>,
    payload: Result<Json<SaveLinkRequest>, JsonRejection>,
) -> Result<Json<Envelope<SaveLinkResponse>>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let link = state
        .link_service
        .save(&payload.url, payload.alias.as_deref())
        .await?;

    Ok(Json(Envelope::ok(SaveLinkResponse { alias: link.alias })))
}

/// Deletes a short link.
///
/// # Endpoint
///
/// `DELETE /url/{alias}` (Bearer token required)
///
/// Deleting an alias that does not exist succeeds as well.
pub async fn delete_link_handler(
    State(state): State<AppState>,
    Path(alias): Path<String>,
) -> Result<Json<Envelope<Empty>>, AppError> {
    state.link_service.remove(&alias).await?;

    Ok(Json(Envelope::ok(Empty {})))
}
