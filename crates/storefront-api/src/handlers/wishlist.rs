//! Wishlist handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use storefront_entity::product::Product;

use crate::dto::response::MessageResponse;
use crate::error::ApiError;
use crate::extractors::CurrentUser;
use crate::state::AppState;

/// GET /api/wishlist
pub async fn get_wishlist(
    State(state): State<AppState>,
    current: CurrentUser,
) -> Result<Json<Vec<Product>>, ApiError> {
    Ok(Json(state.wishlist_service.list(&current).await?))
}

/// POST /api/wishlist/{product_id}
pub async fn add_item(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(product_id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.wishlist_service.add(&current, product_id).await?;
    Ok(Json(MessageResponse {
        message: format!("Product {product_id} added to wishlist"),
    }))
}

/// DELETE /api/wishlist/{product_id}
pub async fn remove_item(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(product_id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.wishlist_service.remove(&current, product_id).await?;
    Ok(Json(MessageResponse {
        message: format!("Product {product_id} removed from wishlist"),
    }))
}
