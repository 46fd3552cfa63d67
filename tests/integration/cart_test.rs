//! Integration tests for the cart and wishlist flows.

use axum::http::StatusCode;
use serde_json::json;
use uuid::Uuid;

use crate::helpers::TestApp;

async fn shopper_token(app: &TestApp, email: &str) -> String {
    app.signup(email).await;
    app.login(email, "abc123").await
}

#[tokio::test]
async fn test_cart_flow_computes_totals() {
    let app = TestApp::new().await;
    let product_id = app.create_product("Ceramic mug", 1_200).await;
    let token = shopper_token(&app, "shopper@example.com").await;

    // Add 2 units.
    let cart = app
        .request(
            "POST",
            "/api/cart/items",
            Some(json!({"product_id": product_id, "quantity": 2})),
            Some(&token),
        )
        .await;
    assert_eq!(cart.status, StatusCode::OK);
    assert_eq!(cart.body["total_cents"].as_i64(), Some(2_400));

    // Adding again sums quantities.
    let cart = app
        .request(
            "POST",
            "/api/cart/items",
            Some(json!({"product_id": product_id})),
            Some(&token),
        )
        .await;
    assert_eq!(cart.body["items"][0]["quantity"].as_i64(), Some(3));
    assert_eq!(cart.body["total_cents"].as_i64(), Some(3_600));

    // Replace the quantity.
    let cart = app
        .request(
            "PUT",
            &format!("/api/cart/items/{product_id}"),
            Some(json!({"quantity": 1})),
            Some(&token),
        )
        .await;
    assert_eq!(cart.body["total_cents"].as_i64(), Some(1_200));

    // Remove the row.
    let cart = app
        .request(
            "DELETE",
            &format!("/api/cart/items/{product_id}"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(cart.body["items"].as_array().unwrap().len(), 0);
    assert_eq!(cart.body["total_cents"].as_i64(), Some(0));
}

#[tokio::test]
async fn test_cart_add_unknown_product_is_404() {
    let app = TestApp::new().await;
    let token = shopper_token(&app, "shopper@example.com").await;

    let response = app
        .request(
            "POST",
            "/api/cart/items",
            Some(json!({"product_id": Uuid::new_v4(), "quantity": 1})),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_cart_rejects_zero_quantity() {
    let app = TestApp::new().await;
    let product_id = app.create_product("Ceramic mug", 1_200).await;
    let token = shopper_token(&app, "shopper@example.com").await;

    let response = app
        .request(
            "POST",
            "/api/cart/items",
            Some(json!({"product_id": product_id, "quantity": 0})),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_carts_are_isolated_per_user() {
    let app = TestApp::new().await;
    let product_id = app.create_product("Ceramic mug", 1_200).await;
    let alice = shopper_token(&app, "alice@example.com").await;
    let bob = shopper_token(&app, "bob@example.com").await;

    app.request(
        "POST",
        "/api/cart/items",
        Some(json!({"product_id": product_id, "quantity": 5})),
        Some(&alice),
    )
    .await;

    let bobs_cart = app.request("GET", "/api/cart", None, Some(&bob)).await;
    assert_eq!(bobs_cart.body["items"].as_array().unwrap().len(), 0);

    // Clearing Bob's cart leaves Alice's intact.
    app.request("DELETE", "/api/cart", None, Some(&bob)).await;
    let alices_cart = app.request("GET", "/api/cart", None, Some(&alice)).await;
    assert_eq!(alices_cart.body["total_cents"].as_i64(), Some(6_000));
}

#[tokio::test]
async fn test_wishlist_flow() {
    let app = TestApp::new().await;
    let product_id = app.create_product("Linen throw", 4_500).await;
    let token = shopper_token(&app, "shopper@example.com").await;

    // Add twice; the second add is a no-op.
    for _ in 0..2 {
        let response = app
            .request(
                "POST",
                &format!("/api/wishlist/{product_id}"),
                None,
                Some(&token),
            )
            .await;
        assert_eq!(response.status, StatusCode::OK);
    }

    let wishlist = app.request("GET", "/api/wishlist", None, Some(&token)).await;
    let items = wishlist.body.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"].as_str(), Some("Linen throw"));

    let removed = app
        .request(
            "DELETE",
            &format!("/api/wishlist/{product_id}"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(removed.status, StatusCode::OK);

    let wishlist = app.request("GET", "/api/wishlist", None, Some(&token)).await;
    assert_eq!(wishlist.body.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_wishlist_requires_authentication() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/wishlist", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
