//! Product catalog handlers: public browsing and admin management.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use uuid::Uuid;

use storefront_core::types::pagination::PageResponse;
use storefront_entity::product::{NewProduct, Product, ProductUpdate};

use crate::dto::request::{CreateProductRequest, UpdateProductRequest};
use crate::dto::response::MessageResponse;
use crate::dto::validate_request;
use crate::error::ApiError;
use crate::extractors::PaginationParams;
use crate::state::AppState;

/// GET /api/products
pub async fn list_products(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<PageResponse<Product>>, ApiError> {
    let page = params.into_page_request();
    Ok(Json(state.catalog_service.list(&page).await?))
}

/// GET /api/products/{id}
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Product>, ApiError> {
    Ok(Json(state.catalog_service.get(id).await?))
}

/// POST /api/admin/products
pub async fn create_product(
    State(state): State<AppState>,
    Json(req): Json<CreateProductRequest>,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    validate_request(&req)?;

    let product = state
        .catalog_service
        .create(NewProduct {
            name: req.name,
            description: req.description,
            price_cents: req.price_cents,
            image_url: req.image_url,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(product)))
}

/// PUT /api/admin/products/{id}
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateProductRequest>,
) -> Result<Json<Product>, ApiError> {
    let product = state
        .catalog_service
        .update(
            id,
            ProductUpdate {
                name: req.name,
                description: req.description,
                price_cents: req.price_cents,
                image_url: req.image_url,
            },
        )
        .await?;

    Ok(Json(product))
}

/// DELETE /api/admin/products/{id}
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.catalog_service.delete(id).await?;
    Ok(Json(MessageResponse {
        message: format!("Product {id} deleted"),
    }))
}
