//! Cart entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::product::Product;

/// One row of a user's cart as stored.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CartItem {
    /// Owning user.
    pub user_id: Uuid,
    /// Referenced product.
    pub product_id: Uuid,
    /// Number of units. Always >= 1.
    pub quantity: i32,
    /// When the item was first added.
    pub added_at: DateTime<Utc>,
}

/// A cart row joined with its product, with the line total computed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartLine {
    /// The product in this line.
    pub product: Product,
    /// Number of units.
    pub quantity: i32,
    /// `product.price_cents * quantity`.
    pub line_total_cents: i64,
}

/// A user's complete cart as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cart {
    /// All lines in the cart.
    pub items: Vec<CartLine>,
    /// Sum of all line totals.
    pub total_cents: i64,
}

impl Cart {
    /// Build a cart from its lines, computing the total.
    pub fn from_lines(items: Vec<CartLine>) -> Self {
        let total_cents = items.iter().map(|l| l.line_total_cents).sum();
        Self { items, total_cents }
    }
}
