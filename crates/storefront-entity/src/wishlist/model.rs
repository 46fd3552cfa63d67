//! Wishlist entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One row of a user's wishlist.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct WishlistItem {
    /// Owning user.
    pub user_id: Uuid,
    /// Referenced product.
    pub product_id: Uuid,
    /// When the item was added.
    pub added_at: DateTime<Utc>,
}
