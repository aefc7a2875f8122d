#![allow(dead_code)]

use axum_test::TestServer;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use url_shortener_api::config::{Config, StorageBackend};
use url_shortener_api::infrastructure::persistence::Store;
use url_shortener_api::routes::router;
use url_shortener_api::state::AppState;
use url_shortener_api::utils::clock::Clock;

pub const TEST_SECRET: &str = "test-signing-secret";
pub const TEST_PASSWORD: &str = "correct horse battery staple";

pub fn test_config() -> Config {
    Config {
        storage_backend: StorageBackend::Memory,
        database_url: None,
        listen_addr: "127.0.0.1:0".to_string(),
        log_level: "info".to_string(),
        log_format: "text".to_string(),
        token_signing_secret: TEST_SECRET.to_string(),
        token_ttl_hours: 24,
        alias_length: 6,
        http_timeout_seconds: 5,
        db_max_connections: 1,
        db_connect_timeout: 1,
        db_idle_timeout: 60,
        db_max_lifetime: 60,
    }
}

/// State over a fresh in-memory store.
pub fn create_test_state() -> AppState {
    AppState::from_store(Arc::new(Store::in_memory()), &test_config()).unwrap()
}

pub fn create_test_state_with_clock(clock: Arc<dyn Clock>) -> AppState {
    AppState::with_clock(Arc::new(Store::in_memory()), &test_config(), clock).unwrap()
}

/// Full application router, including the auth gate and middleware.
pub fn create_test_server(state: AppState) -> TestServer {
    TestServer::new(router(state, Duration::from_secs(5))).unwrap()
}

pub async fn register(server: &TestServer, email: &str) {
    server
        .post("/register")
        .json(&json!({
            "email": email,
            "password": TEST_PASSWORD,
            "confirm_password": TEST_PASSWORD
        }))
        .await
        .assert_status_ok();
}

/// Registers `email` and returns a freshly issued access token.
pub async fn register_and_login(server: &TestServer, email: &str) -> String {
    register(server, email).await;

    let response = server
        .post("/login")
        .json(&json!({ "email": email, "password": TEST_PASSWORD }))
        .await;
    response.assert_status_ok();

    response.json::<serde_json::Value>()["access_token"]
        .as_str()
        .unwrap()
        .to_string()
}
