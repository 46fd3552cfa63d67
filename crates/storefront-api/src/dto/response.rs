//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_entity::user::{Role, User};

/// Login response. Field names match the public wire contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// The bearer token.
    pub token: String,
    /// Token lifetime in milliseconds.
    pub expires_in_millis: i64,
}

/// Signup response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupResponse {
    /// Public display name.
    pub username: String,
    /// Given name.
    pub firstname: String,
    /// Login email.
    pub email: String,
}

/// Identity introspection response: the current principal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrincipalResponse {
    /// The principal's email.
    pub email: String,
    /// The principal's current roles.
    pub roles: Vec<Role>,
}

/// User summary for admin listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// User ID.
    pub id: Uuid,
    /// Login email.
    pub email: String,
    /// Public display name.
    pub username: String,
    /// Given name.
    pub firstname: String,
    /// Roles.
    pub roles: Vec<Role>,
    /// Created at.
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            username: user.username,
            firstname: user.firstname,
            roles: user.roles,
            created_at: user.created_at,
        }
    }
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
}
