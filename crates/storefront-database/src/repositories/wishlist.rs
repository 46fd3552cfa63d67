//! Wishlist repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use storefront_core::error::{AppError, ErrorKind};
use storefront_core::result::AppResult;
use storefront_entity::wishlist::WishlistItem;

use crate::stores::WishlistStore;

/// PostgreSQL-backed wishlist store.
#[derive(Debug, Clone)]
pub struct WishlistRepository {
    pool: PgPool,
}

impl WishlistRepository {
    /// Create a new wishlist repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WishlistStore for WishlistRepository {
    async fn items(&self, user_id: Uuid) -> AppResult<Vec<WishlistItem>> {
        sqlx::query_as::<_, WishlistItem>(
            "SELECT * FROM wishlist_items WHERE user_id = $1 ORDER BY added_at ASC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list wishlist items", e)
        })
    }

    async fn add(&self, user_id: Uuid, product_id: Uuid) -> AppResult<bool> {
        let result = sqlx::query(
            "INSERT INTO wishlist_items (user_id, product_id) VALUES ($1, $2) \
             ON CONFLICT (user_id, product_id) DO NOTHING",
        )
        .bind(user_id)
        .bind(product_id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to add wishlist item", e)
        })?;

        Ok(result.rows_affected() > 0)
    }

    async fn remove(&self, user_id: Uuid, product_id: Uuid) -> AppResult<bool> {
        let result =
            sqlx::query("DELETE FROM wishlist_items WHERE user_id = $1 AND product_id = $2")
                .bind(user_id)
                .bind(product_id)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to remove wishlist item", e)
                })?;

        Ok(result.rows_affected() > 0)
    }
}
