//! Admin handlers.

use axum::Json;
use axum::extract::{Query, State};

use storefront_core::types::pagination::PageResponse;

use crate::dto::response::UserResponse;
use crate::error::ApiError;
use crate::extractors::PaginationParams;
use crate::state::AppState;

/// GET /api/admin/users
pub async fn list_users(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<PageResponse<UserResponse>>, ApiError> {
    let page = params.into_page_request();
    let users = state.stores.users.find_all(&page).await?;
    Ok(Json(users.map(UserResponse::from)))
}
