//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET    /{alias}`       - Short link redirect (public)
//! - `GET    /health`        - Storage health check (public)
//! - `POST   /register`      - Account registration (public)
//! - `POST   /login`         - Token issuance (public)
//! - `POST   /url`           - Create link (Bearer token required)
//! - `DELETE /url/{alias}`   - Delete link (Bearer token required)
//!
//! # Middleware
//!
//! - **Request id** - `x-request-id` generated when absent and echoed back
//! - **Tracing** - Structured request/response logging
//! - **Timeout** - Requests exceeding the configured limit get 408
//! - **Authentication** - Bearer token on link mutations
//! - **Path normalization** - Trailing slash handling

use std::time::Duration;

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::{auth, tracing};
use crate::state::AppState;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::timeout::TimeoutLayer;

/// Routes and middleware without path normalization.
pub fn router(state: AppState, request_timeout: Duration) -> Router {
    let protected = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    Router::new()
        .route("/health", get(health_handler))
        .route("/{alias}", get(redirect_handler))
        .merge(api::routes::public_routes())
        .merge(protected)
        .with_state(state)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .layer(tracing::propagate_request_id_layer())
        .layer(tracing::layer())
        .layer(tracing::set_request_id_layer())
}

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `request_timeout` - upper bound on handling a single request
pub fn app_router(state: AppState, request_timeout: Duration) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state, request_timeout))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, StorageBackend};
    use crate::infrastructure::persistence::Store;
    use axum::body::Body;
    use axum::http::{Request, header};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn test_state() -> AppState {
        let config = Config {
            storage_backend: StorageBackend::Memory,
            database_url: None,
            listen_addr: "127.0.0.1:0".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            token_signing_secret: "secret".to_string(),
            token_ttl_hours: 24,
            alias_length: 6,
            http_timeout_seconds: 5,
            db_max_connections: 1,
            db_connect_timeout: 1,
            db_idle_timeout: 60,
            db_max_lifetime: 60,
        };

        AppState::from_store(Arc::new(Store::in_memory()), &config).unwrap()
    }

    #[tokio::test]
    async fn test_trailing_slash_is_trimmed() {
        let app = app_router(test_state(), Duration::from_secs(5));

        let response = app
            .oneshot(Request::get("/health/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_protected_route_behind_gate() {
        let app = app_router(test_state(), Duration::from_secs(5));

        let response = app
            .oneshot(
                Request::post("/url")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"url":"https://example.com"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
