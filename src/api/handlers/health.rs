//! Handler for health check endpoint.

use axum::{Json, extract::State};
use serde_json::json;

use crate::api::dto::envelope::Envelope;
use crate::api::dto::health::HealthResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns service health status.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: storage answered
/// - **503 Service Unavailable**: storage unreachable, error envelope with
///   the health payload in `details`
///
/// # Response
///
/// ```json
/// { "status": "OK", "version": "0.1.0", "backend": "postgres", "storage": "ok" }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<Envelope<HealthResponse>>, AppError> {
    let healthy = match state.store.ping().await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "storage health check failed");
            false
        }
    };

    let payload = HealthResponse {
        version: env!("CARGO_PKG_VERSION"),
        backend: state.store.backend_name(),
        storage: if healthy { "ok" } else { "error" },
    };

    if healthy {
        Ok(Json(Envelope::ok(payload)))
    } else {
        Err(AppError::unavailable("Storage unavailable", json!(payload)))
    }
}
