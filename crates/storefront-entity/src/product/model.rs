//! Product entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Product {
    /// Unique product identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Long-form description.
    pub description: Option<String>,
    /// Unit price in the smallest currency unit.
    pub price_cents: i64,
    /// URL of the product image.
    pub image_url: Option<String>,
    /// When the product was created.
    pub created_at: DateTime<Utc>,
    /// When the product was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProduct {
    /// Display name.
    pub name: String,
    /// Long-form description.
    pub description: Option<String>,
    /// Unit price in the smallest currency unit.
    pub price_cents: i64,
    /// URL of the product image.
    pub image_url: Option<String>,
}

/// Partial update of an existing product. `None` fields are left unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProductUpdate {
    /// New display name.
    pub name: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New unit price.
    pub price_cents: Option<i64>,
    /// New image URL.
    pub image_url: Option<String>,
}
