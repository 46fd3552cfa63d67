//! Integration tests for catalog browsing and admin product management.

use axum::http::StatusCode;
use serde_json::json;
use uuid::Uuid;

use crate::helpers::{TestApp, assert_error_body};

#[tokio::test]
async fn test_admin_manages_product_lifecycle() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;

    // Create.
    let created = app
        .request(
            "POST",
            "/api/admin/products",
            Some(json!({
                "name": "Walnut desk",
                "description": "Solid walnut writing desk",
                "price_cents": 64_900,
            })),
            Some(&token),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    let id = created.body["id"].as_str().unwrap().to_string();

    // Public read.
    let fetched = app
        .request("GET", &format!("/api/products/{id}"), None, None)
        .await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body["name"].as_str(), Some("Walnut desk"));

    // Update.
    let updated = app
        .request(
            "PUT",
            &format!("/api/admin/products/{id}"),
            Some(json!({"price_cents": 59_900})),
            Some(&token),
        )
        .await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.body["price_cents"].as_i64(), Some(59_900));
    assert_eq!(updated.body["name"].as_str(), Some("Walnut desk"));

    // Delete.
    let deleted = app
        .request(
            "DELETE",
            &format!("/api/admin/products/{id}"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(deleted.status, StatusCode::OK);

    let gone = app
        .request("GET", &format!("/api/products/{id}"), None, None)
        .await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);
    assert_error_body(&gone, &format!("/api/products/{id}"));
}

#[tokio::test]
async fn test_product_listing_is_paginated() {
    let app = TestApp::new().await;
    for i in 0..3 {
        app.create_product(&format!("Product {i}"), 1_000 + i).await;
    }

    let page = app
        .request("GET", "/api/products?page=1&per_page=2", None, None)
        .await;

    assert_eq!(page.status, StatusCode::OK);
    assert_eq!(page.body["items"].as_array().unwrap().len(), 2);
    assert_eq!(page.body["total_items"].as_u64(), Some(3));
    assert_eq!(page.body["total_pages"].as_u64(), Some(2));
    assert_eq!(page.body["has_next"].as_bool(), Some(true));
}

#[tokio::test]
async fn test_unknown_product_is_json_404() {
    let app = TestApp::new().await;
    let id = Uuid::new_v4();

    let response = app
        .request("GET", &format!("/api/products/{id}"), None, None)
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_error_body(&response, &format!("/api/products/{id}"));
}

#[tokio::test]
async fn test_plain_user_cannot_create_products() {
    let app = TestApp::new().await;
    app.signup("shopper@example.com").await;
    let token = app.login("shopper@example.com", "abc123").await;

    let response = app
        .request(
            "POST",
            "/api/admin/products",
            Some(json!({"name": "Sneaky", "price_cents": 1})),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_invalid_product_payload_is_400() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;

    let response = app
        .request(
            "POST",
            "/api/admin/products",
            Some(json!({"name": "", "price_cents": 100})),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_error_body(&response, "/api/admin/products");
}
