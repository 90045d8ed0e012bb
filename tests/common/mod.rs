//! Shared helpers for web integration tests.

#![allow(dead_code)]

use axum::http::header::SET_COOKIE;
use axum_test::{TestResponse, TestServer};
use serde_json::{json, Value};
use std::sync::Arc;

use checkpoint::config::{Config, SecureCookies, SessionMode};
use checkpoint::{create_router, hash_password, AppState, Database, NewUser, UserRepository};

/// Secret used by signed-mode test servers.
pub const TEST_SECRET: &str = "test-secret-key-for-testing-only";

/// Default configuration with plain session tokens.
pub fn plain_config() -> Config {
    Config::default()
}

/// Configuration with signed session tokens.
pub fn signed_config() -> Config {
    let mut config = Config::default();
    config.session.mode = SessionMode::Signed;
    config.session.secret = TEST_SECRET.to_string();
    config
}

/// Configuration that always sets the `Secure` attribute.
pub fn secure_config() -> Config {
    let mut config = Config::default();
    config.session.secure = SecureCookies::Always;
    config
}

/// Create a test server with an in-memory database.
pub async fn create_test_server(config: &Config) -> (TestServer, Database) {
    let db = Database::open_in_memory()
        .await
        .expect("Failed to create test database");

    let app_state = Arc::new(AppState::from_config(config, db.clone()));
    let router = create_router(app_state);
    let server = TestServer::new(router).expect("Failed to create test server");

    (server, db)
}

/// Insert a user and return its id.
pub async fn seed_user(db: &Database, username: &str, password: &str) -> i64 {
    let hash = hash_password(password).expect("Failed to hash password");
    UserRepository::new(db.pool())
        .create(&NewUser::new(username, hash))
        .await
        .expect("Failed to create user")
        .id
}

/// Insert a user with a fixed id.
pub async fn seed_user_with_id(db: &Database, id: i64, username: &str, password: &str) {
    let hash = hash_password(password).expect("Failed to hash password");
    sqlx::query("INSERT INTO users (id, username, password) VALUES (?, ?, ?)")
        .bind(id)
        .bind(username)
        .bind(hash)
        .execute(db.pool())
        .await
        .expect("Failed to create user");
}

/// POST /api/login with the given credentials.
pub async fn login(server: &TestServer, username: &str, password: &str) -> TestResponse {
    server
        .post("/api/login")
        .json(&json!({
            "usuario": username,
            "password": password
        }))
        .await
}

/// The single `Set-Cookie` header of a response, if any.
pub fn set_cookie(response: &TestResponse) -> Option<String> {
    let mut values = response.headers().get_all(SET_COOKIE).iter();
    let value = values.next()?.to_str().ok()?.to_string();
    assert!(values.next().is_none(), "expected a single Set-Cookie header");
    Some(value)
}

/// Value of the session cookie from a `Set-Cookie` header.
pub fn cookie_value(set_cookie: &str) -> &str {
    let pair = set_cookie.split(';').next().unwrap_or_default();
    pair.split_once('=').map(|(_, v)| v).unwrap_or_default()
}

/// Attributes of a `Set-Cookie` header, trimmed.
pub fn cookie_attributes(set_cookie: &str) -> Vec<String> {
    set_cookie
        .split(';')
        .skip(1)
        .map(|a| a.trim().to_string())
        .collect()
}

/// Parse the JSON body of a response.
pub fn body(response: &TestResponse) -> Value {
    response.json::<Value>()
}
