//! Bearer token creation with configurable signing and TTL.

use chrono::{DateTime, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};

use storefront_core::config::AuthConfig;
use storefront_core::error::AppError;

use super::claims::Claims;

/// Creates signed bearer tokens.
///
/// The signing key is derived once from configuration at construction time
/// and never changes for the process lifetime, so issued tokens stay valid
/// for their full TTL.
#[derive(Clone)]
pub struct JwtEncoder {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// Token TTL in minutes.
    ttl_minutes: i64,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder")
            .field("ttl_minutes", &self.ttl_minutes)
            .finish()
    }
}

/// Result of a successful token issuance.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct IssuedToken {
    /// The compact signed token string.
    pub token: String,
    /// When the token was issued.
    pub issued_at: DateTime<Utc>,
    /// When the token expires.
    pub expires_at: DateTime<Utc>,
}

impl IssuedToken {
    /// The token lifetime in milliseconds, as reported to clients.
    pub fn expires_in_millis(&self) -> i64 {
        (self.expires_at - self.issued_at).num_milliseconds()
    }
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            ttl_minutes: config.token_ttl_minutes as i64,
        }
    }

    /// Issues a signed token for the given subject.
    ///
    /// Claims are `{sub, iat=now, exp=now+ttl}` with second precision.
    pub fn issue(&self, subject: &str) -> Result<IssuedToken, AppError> {
        let issued_at = Utc::now();
        let expires_at = issued_at + chrono::Duration::minutes(self.ttl_minutes);

        let claims = Claims {
            sub: subject.to_string(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode token: {e}")))?;

        Ok(IssuedToken {
            token,
            issued_at,
            expires_at,
        })
    }
}
