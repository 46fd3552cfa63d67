//! Shopping cart handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use storefront_entity::cart::Cart;

use crate::dto::request::{AddCartItemRequest, UpdateCartItemRequest};
use crate::dto::response::MessageResponse;
use crate::dto::validate_request;
use crate::error::ApiError;
use crate::extractors::CurrentUser;
use crate::state::AppState;

/// GET /api/cart
pub async fn get_cart(
    State(state): State<AppState>,
    current: CurrentUser,
) -> Result<Json<Cart>, ApiError> {
    Ok(Json(state.cart_service.view(&current).await?))
}

/// POST /api/cart/items
pub async fn add_item(
    State(state): State<AppState>,
    current: CurrentUser,
    Json(req): Json<AddCartItemRequest>,
) -> Result<Json<Cart>, ApiError> {
    validate_request(&req)?;
    let cart = state
        .cart_service
        .add_item(&current, req.product_id, req.quantity)
        .await?;
    Ok(Json(cart))
}

/// PUT /api/cart/items/{product_id}
pub async fn update_item(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(product_id): Path<Uuid>,
    Json(req): Json<UpdateCartItemRequest>,
) -> Result<Json<Cart>, ApiError> {
    validate_request(&req)?;
    let cart = state
        .cart_service
        .set_quantity(&current, product_id, req.quantity)
        .await?;
    Ok(Json(cart))
}

/// DELETE /api/cart/items/{product_id}
pub async fn remove_item(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(product_id): Path<Uuid>,
) -> Result<Json<Cart>, ApiError> {
    Ok(Json(
        state.cart_service.remove_item(&current, product_id).await?,
    ))
}

/// DELETE /api/cart
pub async fn clear_cart(
    State(state): State<AppState>,
    current: CurrentUser,
) -> Result<Json<MessageResponse>, ApiError> {
    let removed = state.cart_service.clear(&current).await?;
    Ok(Json(MessageResponse {
        message: format!("Removed {removed} items from the cart"),
    }))
}
