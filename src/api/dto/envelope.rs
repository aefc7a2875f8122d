//! Uniform response envelope.
//!
//! Every JSON response carries a top-level `status` field. Successful
//! responses flatten their payload next to it:
//!
//! ```json
//! { "status": "OK", "alias": "aB3xZ9" }
//! ```
//!
//! Failures use [`crate::error::ErrorEnvelope`].

use serde::Serialize;

/// Outcome marker serialized as `"OK"` or `"Error"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Status {
    #[serde(rename = "OK")]
    Ok,
    Error,
}

/// Successful response wrapping a payload.
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub status: Status,
    #[serde(flatten)]
    pub payload: T,
}

impl<T: Serialize> Envelope<T> {
    pub fn ok(payload: T) -> Self {
        Self {
            status: Status::Ok,
            payload,
        }
    }
}

/// Payload for responses that carry nothing but the status.
#[derive(Debug, Serialize)]
pub struct Empty {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize)]
    struct Payload {
        alias: &'static str,
    }

    #[test]
    fn test_payload_is_flattened() {
        let body = serde_json::to_value(Envelope::ok(Payload { alias: "abc" })).unwrap();

        assert_eq!(body, json!({ "status": "OK", "alias": "abc" }));
    }

    #[test]
    fn test_empty_payload() {
        let body = serde_json::to_value(Envelope::ok(Empty {})).unwrap();

        assert_eq!(body, json!({ "status": "OK" }));
    }

    #[test]
    fn test_error_status_serialization() {
        assert_eq!(serde_json::to_value(Status::Error).unwrap(), "Error");
    }
}
