//! DTOs for health check endpoint.

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub version: &'static str,
    /// Backend name, e.g. `postgres` or `memory`.
    pub backend: &'static str,
    /// `ok` or `error`.
    pub storage: &'static str,
}
