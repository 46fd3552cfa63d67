//! Shared test helpers for integration tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::Value;
use tower::ServiceExt;

use storefront_api::AppState;
use storefront_auth::password::PasswordHasher;
use storefront_core::config::AppConfig;
use storefront_database::stores::Stores;

/// Secret used by every test app, so tests can mint their own tokens.
pub const TEST_JWT_SECRET: &str = "integration-test-secret";

/// Test application context.
pub struct TestApp {
    /// The Axum router for making test requests.
    pub router: Router,
    /// The shared application state, for direct store access.
    pub state: AppState,
}

/// A decoded test response.
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code.
    pub status: StatusCode,
    /// Parsed JSON body (`Null` when the body is empty or not JSON).
    pub body: Value,
}

impl TestApp {
    /// Create a new test application over the in-memory backend, with the
    /// admin account seeded.
    pub async fn new() -> Self {
        let mut config = AppConfig::default();
        config.database.backend = "memory".to_string();
        config.auth.jwt_secret = TEST_JWT_SECRET.to_string();

        let stores = Stores::in_memory();
        storefront_auth::seed::ensure_seed_admin(
            &stores.users,
            &PasswordHasher::new(),
            &config.auth,
        )
        .await
        .expect("Failed to seed admin");

        let state = AppState::new(Arc::new(config), stores);
        let router = storefront_api::build_router(state.clone());

        Self { router, state }
    }

    /// Issue a request and decode the response.
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        self.request_with_language(method, path, body, token, None)
            .await
    }

    /// Issue a request with an explicit `Accept-Language` header.
    pub async fn request_with_language(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
        language: Option<&str>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(path);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        if let Some(language) = language {
            builder = builder.header(header::ACCEPT_LANGUAGE, language);
        }

        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&json).unwrap()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Request failed");

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }

    /// Sign up a user with the given email. Password is `abc123`.
    pub async fn signup(&self, email: &str) -> TestResponse {
        self.request(
            "POST",
            "/api/auth/signup",
            Some(serde_json::json!({
                "username": "shopper",
                "firstname": "Sam",
                "email": email,
                "password": "abc123",
            })),
            None,
        )
        .await
    }

    /// Log in and return the bearer token.
    pub async fn login(&self, email: &str, password: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/auth/login",
                Some(serde_json::json!({
                    "email": email,
                    "password": password,
                })),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );
        response.body["token"]
            .as_str()
            .expect("Login response has no token")
            .to_string()
    }

    /// Log in as the seeded admin.
    pub async fn admin_token(&self) -> String {
        self.login("admin@admin.com", "123456").await
    }

    /// Create a product through the admin API and return its ID.
    pub async fn create_product(&self, name: &str, price_cents: i64) -> String {
        let token = self.admin_token().await;
        let response = self
            .request(
                "POST",
                "/api/admin/products",
                Some(serde_json::json!({
                    "name": name,
                    "price_cents": price_cents,
                })),
                Some(&token),
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Product creation failed: {:?}",
            response.body
        );
        response.body["id"]
            .as_str()
            .expect("Product response has no id")
            .to_string()
    }
}

/// Assert that a response body has the standard error shape.
pub fn assert_error_body(response: &TestResponse, path: &str) {
    assert!(
        response.body["error"].is_string(),
        "Missing 'error' in {:?}",
        response.body
    );
    assert!(
        response.body["message"].is_string(),
        "Missing 'message' in {:?}",
        response.body
    );
    assert_eq!(
        response.body["path"].as_str(),
        Some(path),
        "Wrong 'path' in {:?}",
        response.body
    );
}
