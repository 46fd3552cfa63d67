//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::role::Role;

/// A registered user of the storefront.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier, assigned at creation.
    pub id: Uuid,
    /// Unique login email.
    pub email: String,
    /// Public display name.
    pub username: String,
    /// Given name.
    pub firstname: String,
    /// Argon2 password hash. Never serialized.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Roles held by this user. Always non-empty.
    pub roles: Vec<Role>,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Check whether this user holds the given role.
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    /// Check whether this user holds the admin role.
    pub fn is_admin(&self) -> bool {
        self.has_role(Role::Admin)
    }
}

/// Data required to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Login email.
    pub email: String,
    /// Public display name.
    pub username: String,
    /// Given name.
    pub firstname: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Roles to assign. Must be non-empty.
    pub roles: Vec<Role>,
}
