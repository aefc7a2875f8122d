mod common;

use chrono::{Duration, TimeZone, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use serde_json::json;
use std::sync::Arc;
use url_shortener_api::application::services::Claims;
use url_shortener_api::utils::clock::ManualClock;

#[tokio::test]
async fn test_missing_authorization_header() {
    let server = common::create_test_server(common::create_test_state());

    let response = server
        .post("/url")
        .json(&json!({ "url": "https://example.com", "alias": "x" }))
        .await;

    response.assert_status_unauthorized();
    assert_eq!(response.header("www-authenticate"), "Bearer");
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "Error");
    assert_eq!(json["code"], "unauthorized");
}

#[tokio::test]
async fn test_basic_scheme_rejected() {
    let server = common::create_test_server(common::create_test_state());

    let response = server
        .delete("/url/anything")
        .add_header("Authorization", "Basic dXNlcjpwYXNz")
        .await;

    response.assert_status_unauthorized();
}

#[tokio::test]
async fn test_garbage_token_rejected() {
    let server = common::create_test_server(common::create_test_state());

    server
        .post("/url")
        .authorization_bearer("not.a.jwt")
        .json(&json!({ "url": "https://example.com" }))
        .await
        .assert_status_unauthorized();
}

#[tokio::test]
async fn test_token_signed_with_other_secret_rejected() {
    let server = common::create_test_server(common::create_test_state());
    let now = Utc::now().timestamp();

    let forged = encode(
        &Header::default(),
        &Claims {
            sub: "00000000-0000-0000-0000-000000000000".to_string(),
            email: "mallory@example.com".to_string(),
            iat: now,
            exp: now + 3600,
        },
        &EncodingKey::from_secret(b"some-other-secret"),
    )
    .unwrap();

    server
        .post("/url")
        .authorization_bearer(&forged)
        .json(&json!({ "url": "https://example.com" }))
        .await
        .assert_status_unauthorized();
}

#[tokio::test]
async fn test_rejected_request_does_not_reach_service() {
    let server = common::create_test_server(common::create_test_state());

    server
        .post("/url")
        .authorization_bearer("invalid")
        .json(&json!({ "url": "https://example.com", "alias": "blocked" }))
        .await
        .assert_status_unauthorized();

    server.get("/blocked").await.assert_status_not_found();
}

#[tokio::test]
async fn test_expired_token_rejected() {
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let clock = Arc::new(ManualClock::new(start));
    let server = common::create_test_server(common::create_test_state_with_clock(clock.clone()));

    let token = common::register_and_login(&server, "clock@example.com").await;

    clock.advance(Duration::hours(23));
    server
        .post("/url")
        .authorization_bearer(&token)
        .json(&json!({ "url": "https://example.com" }))
        .await
        .assert_status_ok();

    clock.advance(Duration::hours(1));
    server
        .post("/url")
        .authorization_bearer(&token)
        .json(&json!({ "url": "https://example.com" }))
        .await
        .assert_status_unauthorized();
}

#[tokio::test]
async fn test_request_id_is_returned() {
    let server = common::create_test_server(common::create_test_state());

    let response = server.get("/health").await;
    assert!(response.headers().contains_key("x-request-id"));

    let response = server
        .get("/health")
        .add_header("x-request-id", "req-123")
        .await;
    assert_eq!(response.header("x-request-id"), "req-123");
}
