//! Handlers for account registration and login.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use validator::Validate;

use crate::api::dto::accounts::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};
use crate::api::dto::envelope::Envelope;
use crate::error::AppError;
use crate::state::AppState;

/// Registers a new account.
///
/// # Endpoint
///
/// `POST /register`
///
/// # Request Body
///
/// ```json
/// { "email": "user@example.com", "password": "secret", "confirm_password": "secret" }
/// ```
///
/// # Errors
///
/// - 400 Bad Request: malformed body or passwords differ
/// - 409 Conflict: email already registered
pub async fn register_handler(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<Json<Envelope<RegisterResponse>>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let id = state
        .account_service
        .register(&payload.email, &payload.password, &payload.confirm_password)
        .await?;

    Ok(Json(Envelope::ok(RegisterResponse { id })))
}

/// Exchanges credentials for a bearer token.
///
/// # Endpoint
///
/// `POST /login`
///
/// # Response
///
/// ```json
/// { "status": "OK", "access_token": "eyJhbGciOi..." }
/// ```
///
/// # Errors
///
/// Returns 401 Unauthorized for unknown accounts and wrong passwords.
pub async fn login_handler(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<Envelope<LoginResponse>>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let access_token = state
        .account_service
        .login(&payload.email, &payload.password)
        .await?;

    Ok(Json(Envelope::ok(LoginResponse { access_token })))
}
