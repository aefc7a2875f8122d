//! DTOs for link management endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to create a short link.
///
/// An absent or empty `alias` makes the service generate one.
#[derive(Debug, Deserialize, Validate)]
pub struct SaveLinkRequest {
    #[validate(url(message = "Invalid URL format"))]
    pub url: String,

    #[serde(default)]
    pub alias: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SaveLinkResponse {
    pub alias: String,
}
