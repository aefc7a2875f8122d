//! API route configuration.
//!
//! Link mutations require Bearer token authentication via
//! [`crate::api::middleware::auth`]; account routes are public.

use crate::api::handlers::{delete_link_handler, login_handler, register_handler, save_link_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, post},
};

/// Link mutation routes. The caller attaches the auth gate.
///
/// # Endpoints
///
/// - `POST   /url`           - Create a short link
/// - `DELETE /url/{alias}`   - Delete a short link
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/url", post(save_link_handler))
        .route("/url/{alias}", delete(delete_link_handler))
}

/// Account routes.
///
/// # Endpoints
///
/// - `POST /register` - Create an account
/// - `POST /login`    - Exchange credentials for a bearer token
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register_handler))
        .route("/login", post(login_handler))
}
