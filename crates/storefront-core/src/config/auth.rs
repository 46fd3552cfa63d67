//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Authentication and credential configuration.
///
/// Built once at startup and injected into the token codec and the
/// authenticator; never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for JWT signing (HMAC-SHA256).
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Bearer token TTL in minutes.
    #[serde(default = "default_token_ttl")]
    pub token_ttl_minutes: u64,
    /// Minimum password length accepted at signup.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
    /// Email of the seeded administrator account.
    #[serde(default = "default_seed_admin_email")]
    pub seed_admin_email: String,
    /// Password of the seeded administrator account.
    #[serde(default = "default_seed_admin_password")]
    pub seed_admin_password: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            token_ttl_minutes: default_token_ttl(),
            password_min_length: default_password_min(),
            seed_admin_email: default_seed_admin_email(),
            seed_admin_password: default_seed_admin_password(),
        }
    }
}

fn default_jwt_secret() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}

fn default_token_ttl() -> u64 {
    60
}

fn default_password_min() -> usize {
    6
}

fn default_seed_admin_email() -> String {
    "admin@admin.com".to_string()
}

fn default_seed_admin_password() -> String {
    "123456".to_string()
}
