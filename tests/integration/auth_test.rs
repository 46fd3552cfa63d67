//! Integration tests for login, signup, and identity introspection.

use axum::http::StatusCode;
use serde_json::json;

use storefront_database::stores::UserStore;

use crate::helpers::{TestApp, assert_error_body};

#[tokio::test]
async fn test_seeded_admin_login_and_introspection() {
    let app = TestApp::new().await;
    let token = app.login("admin@admin.com", "123456").await;

    let response = app.request("GET", "/api/auth/me", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["email"].as_str(), Some("admin@admin.com"));

    let roles: Vec<&str> = response.body["roles"]
        .as_array()
        .expect("roles is an array")
        .iter()
        .filter_map(|r| r.as_str())
        .collect();
    assert!(roles.contains(&"ADMIN"), "Expected ADMIN in {roles:?}");
    assert!(roles.contains(&"USER"), "Expected USER in {roles:?}");
}

#[tokio::test]
async fn test_login_reports_token_ttl_in_millis() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({"email": "admin@admin.com", "password": "123456"})),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["token"].as_str().is_some_and(|t| !t.is_empty()));
    // Default TTL is 60 minutes.
    assert_eq!(response.body["expiresInMillis"].as_i64(), Some(3_600_000));
}

#[tokio::test]
async fn test_bad_credentials_are_undifferentiated() {
    let app = TestApp::new().await;

    let wrong_password = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({"email": "admin@admin.com", "password": "nope99"})),
            None,
        )
        .await;
    let unknown_email = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({"email": "ghost@example.com", "password": "123456"})),
            None,
        )
        .await;

    assert_eq!(wrong_password.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status, StatusCode::UNAUTHORIZED);
    assert_error_body(&wrong_password, "/api/auth/login");
    // Identical bodies: no email-existence oracle.
    assert_eq!(wrong_password.body, unknown_email.body);
}

#[tokio::test]
async fn test_signup_roundtrip_with_default_role() {
    let app = TestApp::new().await;

    let response = app.signup("shopper@example.com").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["username"].as_str(), Some("shopper"));
    assert_eq!(response.body["firstname"].as_str(), Some("Sam"));
    assert_eq!(response.body["email"].as_str(), Some("shopper@example.com"));

    let token = app.login("shopper@example.com", "abc123").await;
    let me = app.request("GET", "/api/auth/me", None, Some(&token)).await;

    assert_eq!(me.status, StatusCode::OK);
    assert_eq!(me.body["roles"], json!(["USER"]));
}

#[tokio::test]
async fn test_duplicate_signup_is_bad_request() {
    let app = TestApp::new().await;

    assert_eq!(app.signup("dup@example.com").await.status, StatusCode::OK);

    let duplicate = app.signup("dup@example.com").await;
    assert_eq!(duplicate.status, StatusCode::BAD_REQUEST);
    assert_error_body(&duplicate, "/api/auth/signup");
    assert!(
        duplicate.body["message"]
            .as_str()
            .unwrap()
            .contains("dup@example.com"),
        "Message should echo the email: {:?}",
        duplicate.body
    );

    // Seeded admin + one shopper only.
    assert_eq!(app.state.stores.users.count().await.unwrap(), 2);
}

#[tokio::test]
async fn test_concurrent_signup_has_exactly_one_winner() {
    let app = TestApp::new().await;

    let (first, second) = tokio::join!(
        app.signup("race@example.com"),
        app.signup("race@example.com"),
    );

    let mut statuses = [first.status, second.status];
    statuses.sort();
    assert_eq!(
        statuses,
        [StatusCode::OK, StatusCode::BAD_REQUEST],
        "Exactly one signup must win"
    );
    assert_eq!(app.state.stores.users.count().await.unwrap(), 2);
}

#[tokio::test]
async fn test_introspection_without_token_is_unauthorized() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/auth/me", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_error_body(&response, "/api/auth/me");
}
