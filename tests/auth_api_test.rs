//! Authentication API integration tests
//!
//! Tests for the user endpoints: the access gate, registration validation,
//! login, and the user listing. Gate and validation tests run without a
//! database (token verification is stateless and validation short-circuits
//! before any query); tests marked `#[ignore]` need a live PostgreSQL
//! instance reachable through `DATABASE_URL`.

mod common;

use axum::http::StatusCode;
use jsonwebtoken::{encode, EncodingKey, Header};
use moviedb::auth::sessions::{create_token, verify_token, Claims, TokenKeys};
use pretty_assertions::assert_eq;
use serial_test::serial;

use common::{lazy_state, test_server, TestDatabase, TEST_SECRET};

fn unix_now() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_secs()
}

#[tokio::test]
async fn test_protected_without_token_fails_closed() {
    let server = test_server(lazy_state());

    let response = server.get("/users/protected").await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_protected_with_garbage_token_fails_closed() {
    let server = test_server(lazy_state());

    let response = server
        .get("/users/protected")
        .add_header("Authorization", "not.a.token")
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_protected_with_foreign_secret_fails_closed() {
    let server = test_server(lazy_state());

    let foreign = TokenKeys::from_secret(b"a-different-secret");
    let token = create_token(&foreign, "a@b.com", "user").unwrap();

    let response = server
        .get("/users/protected")
        .add_header("Authorization", token)
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_protected_with_expired_token_fails_closed() {
    let server = test_server(lazy_state());

    // Correct signature, expiry two hours in the past
    let now = unix_now();
    let claims = Claims {
        email: "a@b.com".to_string(),
        role: "user".to_string(),
        exp: now - 7200,
        iat: now - 10800,
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET),
    )
    .unwrap();

    let response = server
        .get("/users/protected")
        .add_header("Authorization", token)
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_protected_with_valid_token_succeeds() {
    let server = test_server(lazy_state());

    let keys = TokenKeys::from_secret(TEST_SECRET);
    let token = create_token(&keys, "a@b.com", "user").unwrap();

    let response = server
        .get("/users/protected")
        .add_header("Authorization", token)
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "Hanya user terdaftar yang bisa mengakses ini!");
}

#[tokio::test]
async fn test_protected_accepts_bearer_prefix() {
    let server = test_server(lazy_state());

    let keys = TokenKeys::from_secret(TEST_SECRET);
    let token = create_token(&keys, "a@b.com", "user").unwrap();

    let response = server
        .get("/users/protected")
        .add_header("Authorization", format!("Bearer {}", token))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn test_register_missing_fields_returns_400() {
    let server = test_server(lazy_state());

    let response = server
        .post("/users/register")
        .json(&serde_json::json!({
            "email": "user@example.com",
            "password": "secret"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unmatched_route_returns_404() {
    let server = test_server(lazy_state());

    let response = server.get("/nonexistent").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Halaman tidak ditemukan");
}

#[tokio::test]
#[serial]
#[ignore = "requires a PostgreSQL instance (set DATABASE_URL)"]
async fn test_register_success() {
    let db = TestDatabase::new().await;
    let server = test_server(db.state());

    let response = server
        .post("/users/register")
        .json(&serde_json::json!({
            "email": "a@b.com",
            "gender": "female",
            "password": "secret",
            "role": "user"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
}

#[tokio::test]
#[serial]
#[ignore = "requires a PostgreSQL instance (set DATABASE_URL)"]
async fn test_login_round_trip() {
    let db = TestDatabase::new().await;
    let server = test_server(db.state());

    server
        .post("/users/register")
        .json(&serde_json::json!({
            "email": "a@b.com",
            "gender": "female",
            "password": "secret",
            "role": "admin"
        }))
        .await;

    let response = server
        .post("/users/login")
        .json(&serde_json::json!({
            "email": "a@b.com",
            "password": "secret"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    let token = body["token"].as_str().unwrap();

    // The issued token decodes back to the stored identity
    let keys = TokenKeys::from_secret(TEST_SECRET);
    let claims = verify_token(&keys, token).unwrap();
    assert_eq!(claims.email, "a@b.com");
    assert_eq!(claims.role, "admin");
}

#[tokio::test]
#[serial]
#[ignore = "requires a PostgreSQL instance (set DATABASE_URL)"]
async fn test_login_wrong_password() {
    let db = TestDatabase::new().await;
    let server = test_server(db.state());

    server
        .post("/users/register")
        .json(&serde_json::json!({
            "email": "a@b.com",
            "gender": "female",
            "password": "secret",
            "role": "user"
        }))
        .await;

    let response = server
        .post("/users/login")
        .json(&serde_json::json!({
            "email": "a@b.com",
            "password": "wrong"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Invalid Password");
}

#[tokio::test]
#[serial]
#[ignore = "requires a PostgreSQL instance (set DATABASE_URL)"]
async fn test_login_unknown_user() {
    let db = TestDatabase::new().await;
    let server = test_server(db.state());

    let response = server
        .post("/users/login")
        .json(&serde_json::json!({
            "email": "nobody@example.com",
            "password": "secret"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "User Not Found");
}

#[tokio::test]
#[serial]
#[ignore = "requires a PostgreSQL instance (set DATABASE_URL)"]
async fn test_user_listing_excludes_password_hash() {
    let db = TestDatabase::new().await;
    let server = test_server(db.state());

    server
        .post("/users/register")
        .json(&serde_json::json!({
            "email": "a@b.com",
            "gender": "female",
            "password": "secret",
            "role": "user"
        }))
        .await;

    let response = server.get("/users").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["email"], "a@b.com");
    assert!(rows[0].get("password_hash").is_none());
}
