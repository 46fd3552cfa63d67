//! Cart repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use storefront_core::error::{AppError, ErrorKind};
use storefront_core::result::AppResult;
use storefront_entity::cart::CartItem;

use crate::stores::CartStore;

/// PostgreSQL-backed shopping cart store.
#[derive(Debug, Clone)]
pub struct CartRepository {
    pool: PgPool,
}

impl CartRepository {
    /// Create a new cart repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CartStore for CartRepository {
    async fn items(&self, user_id: Uuid) -> AppResult<Vec<CartItem>> {
        sqlx::query_as::<_, CartItem>(
            "SELECT * FROM cart_items WHERE user_id = $1 ORDER BY added_at ASC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list cart items", e))
    }

    async fn add_item(
        &self,
        user_id: Uuid,
        product_id: Uuid,
        quantity: i32,
    ) -> AppResult<CartItem> {
        sqlx::query_as::<_, CartItem>(
            "INSERT INTO cart_items (user_id, product_id, quantity) VALUES ($1, $2, $3) \
             ON CONFLICT (user_id, product_id) \
             DO UPDATE SET quantity = cart_items.quantity + EXCLUDED.quantity \
             RETURNING *",
        )
        .bind(user_id)
        .bind(product_id)
        .bind(quantity)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to add cart item", e))
    }

    async fn set_quantity(
        &self,
        user_id: Uuid,
        product_id: Uuid,
        quantity: i32,
    ) -> AppResult<bool> {
        let result = sqlx::query(
            "UPDATE cart_items SET quantity = $3 WHERE user_id = $1 AND product_id = $2",
        )
        .bind(user_id)
        .bind(product_id)
        .bind(quantity)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update cart quantity", e)
        })?;

        Ok(result.rows_affected() > 0)
    }

    async fn remove_item(&self, user_id: Uuid, product_id: Uuid) -> AppResult<bool> {
        let result =
            sqlx::query("DELETE FROM cart_items WHERE user_id = $1 AND product_id = $2")
                .bind(user_id)
                .bind(product_id)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to remove cart item", e)
                })?;

        Ok(result.rows_affected() > 0)
    }

    async fn clear(&self, user_id: Uuid) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM cart_items WHERE user_id = $1")
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to clear cart", e))?;

        Ok(result.rows_affected())
    }
}
