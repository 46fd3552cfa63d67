//! Integration tests for route protection and the error responder.

use axum::http::StatusCode;

use storefront_auth::jwt::JwtEncoder;
use storefront_core::config::AuthConfig;
use storefront_database::stores::UserStore;
use storefront_entity::user::Role;

use crate::helpers::{TEST_JWT_SECRET, TestApp, assert_error_body};

/// Mint a token that is expired the instant it is issued (ttl = 0 and the
/// expiry boundary is inclusive).
fn expired_token(subject: &str) -> String {
    let encoder = JwtEncoder::new(&AuthConfig {
        jwt_secret: TEST_JWT_SECRET.to_string(),
        token_ttl_minutes: 0,
        ..AuthConfig::default()
    });
    encoder.issue(subject).unwrap().token
}

#[tokio::test]
async fn test_public_route_without_header_is_ok() {
    let app = TestApp::new().await;
    let response = app.request("GET", "/api/products", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_public_route_ignores_garbage_token() {
    let app = TestApp::new().await;
    let response = app
        .request("GET", "/api/products", None, Some("not-a-real-token"))
        .await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_public_route_ignores_expired_token() {
    let app = TestApp::new().await;
    let response = app
        .request(
            "GET",
            "/api/products",
            None,
            Some(&expired_token("admin@admin.com")),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_protected_route_without_header_is_401() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/cart", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_error_body(&response, "/api/cart");
}

#[tokio::test]
async fn test_protected_route_with_expired_token_is_401_not_500() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "GET",
            "/api/cart",
            None,
            Some(&expired_token("admin@admin.com")),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_error_body(&response, "/api/cart");
    assert!(
        response.body["message"].as_str().unwrap().contains("expired"),
        "401 for an expired token should say so: {:?}",
        response.body
    );
}

#[tokio::test]
async fn test_protected_route_with_tampered_token_is_401() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;

    // Flip one character of the payload segment.
    let mut parts: Vec<String> = token.split('.').map(String::from).collect();
    let mut payload = parts[1].clone().into_bytes();
    payload[0] = if payload[0] == b'A' { b'B' } else { b'A' };
    parts[1] = String::from_utf8(payload).unwrap();
    let tampered = parts.join(".");

    let response = app
        .request("GET", "/api/auth/me", None, Some(&tampered))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_error_body(&response, "/api/auth/me");
}

#[tokio::test]
async fn test_admin_route_checks_authentication_before_role() {
    let app = TestApp::new().await;

    // No token: 401, never 403.
    let response = app.request("GET", "/api/admin/users", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_admin_route_forbidden_for_plain_user() {
    let app = TestApp::new().await;
    app.signup("shopper@example.com").await;
    let token = app.login("shopper@example.com", "abc123").await;

    let response = app
        .request("GET", "/api/admin/users", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_error_body(&response, "/api/admin/users");

    // The message must not leak the required role.
    let message = response.body["message"].as_str().unwrap();
    assert!(
        !message.to_lowercase().contains("admin") && !message.to_lowercase().contains("role"),
        "403 message leaks authorization detail: {message}"
    );
}

#[tokio::test]
async fn test_admin_route_allowed_for_admin() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;

    let response = app
        .request("GET", "/api/admin/users", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["items"].is_array());
}

#[tokio::test]
async fn test_deleted_account_token_is_anonymous() {
    let app = TestApp::new().await;

    // A correctly signed token whose subject was never registered.
    let encoder = JwtEncoder::new(&AuthConfig {
        jwt_secret: TEST_JWT_SECRET.to_string(),
        ..AuthConfig::default()
    });
    let orphan = encoder.issue("ghost@example.com").unwrap().token;

    let response = app.request("GET", "/api/auth/me", None, Some(&orphan)).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    // Reported exactly like an invalid token, not as a distinct error.
    assert!(
        !response.body["message"]
            .as_str()
            .unwrap()
            .to_lowercase()
            .contains("ghost"),
        "401 must not reveal subject resolution: {:?}",
        response.body
    );
}

#[tokio::test]
async fn test_unmatched_route_is_json_404() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/does-not-exist", None, None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_error_body(&response, "/api/does-not-exist");
}

#[tokio::test]
async fn test_error_title_is_localized() {
    let app = TestApp::new().await;
    app.signup("shopper@example.com").await;
    let token = app.login("shopper@example.com", "abc123").await;

    let english = app
        .request_with_language("GET", "/api/admin/users", None, Some(&token), Some("en-US"))
        .await;
    let french = app
        .request_with_language(
            "GET",
            "/api/admin/users",
            None,
            Some(&token),
            Some("fr-FR,fr;q=0.9"),
        )
        .await;

    assert_eq!(english.status, StatusCode::FORBIDDEN);
    assert_eq!(french.status, StatusCode::FORBIDDEN);
    assert_eq!(english.body["error"].as_str(), Some("Access denied"));
    assert_eq!(french.body["error"].as_str(), Some("Accès refusé"));
}

#[tokio::test]
async fn test_role_change_takes_effect_without_reissuing_token() {
    let app = TestApp::new().await;
    app.signup("promoted@example.com").await;
    let token = app.login("promoted@example.com", "abc123").await;

    // Not an admin yet.
    let before = app
        .request("GET", "/api/admin/users", None, Some(&token))
        .await;
    assert_eq!(before.status, StatusCode::FORBIDDEN);

    // Promote through the store. Roles live there, not in the token, so
    // the same token carries admin access on the very next request.
    let user = app
        .state
        .stores
        .users
        .find_by_email("promoted@example.com")
        .await
        .unwrap()
        .unwrap();
    app.state
        .stores
        .users
        .update_roles(user.id, &[Role::User, Role::Admin])
        .await
        .unwrap();

    let after = app
        .request("GET", "/api/admin/users", None, Some(&token))
        .await;
    assert_eq!(after.status, StatusCode::OK);
}
