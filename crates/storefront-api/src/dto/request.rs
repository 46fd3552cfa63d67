//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Login email.
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Signup request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignupRequest {
    /// Public display name.
    #[validate(length(min = 3, max = 100))]
    pub username: String,
    /// Given name.
    #[validate(length(min = 1, max = 100))]
    pub firstname: String,
    /// Login email.
    #[validate(email)]
    pub email: String,
    /// Plaintext password; the full policy is enforced by the authenticator.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Add-to-cart request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AddCartItemRequest {
    /// The product to add.
    pub product_id: Uuid,
    /// Units to add (default: 1).
    #[serde(default = "default_quantity")]
    #[validate(range(min = 1))]
    pub quantity: i32,
}

/// Cart quantity update request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateCartItemRequest {
    /// New quantity for the cart row.
    #[validate(range(min = 1))]
    pub quantity: i32,
}

/// Product creation request body (admin).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateProductRequest {
    /// Display name.
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    /// Long-form description.
    pub description: Option<String>,
    /// Unit price in the smallest currency unit.
    #[validate(range(min = 0))]
    pub price_cents: i64,
    /// URL of the product image.
    pub image_url: Option<String>,
}

/// Product update request body (admin). `None` fields are left unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdateProductRequest {
    /// New display name.
    pub name: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New unit price.
    pub price_cents: Option<i64>,
    /// New image URL.
    pub image_url: Option<String>,
}

fn default_quantity() -> i32 {
    1
}
