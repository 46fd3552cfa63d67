//! Bearer token validation.

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use thiserror::Error;

use storefront_core::config::AuthConfig;
use storefront_core::error::AppError;

use super::claims::Claims;

/// Why a token failed to parse.
///
/// The two outcomes are deliberately distinct: an expired token is
/// syntactically valid and correctly signed but temporally rejected, while
/// an invalid token is malformed or carries a bad signature. Both collapse
/// to "anonymous" at the policy layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenError {
    /// The token is well-formed and correctly signed but past its expiry.
    #[error("token has expired")]
    Expired,
    /// The token is malformed, forged, or otherwise unverifiable.
    #[error("token is invalid")]
    Invalid,
}

impl From<TokenError> for AppError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Expired => AppError::authentication("Token has expired"),
            TokenError::Invalid => AppError::authentication("Invalid authentication token"),
        }
    }
}

/// Validates bearer tokens.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked manually below so the boundary is exact at
        // second precision (equality counts as expired); the library check
        // stays off to keep the two rejection reasons separable.
        validation.validate_exp = false;

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes and validates a token string.
    ///
    /// Checks, in order:
    /// 1. Structure and signature (constant-time compare inside the MAC
    ///    verification) — failure is [`TokenError::Invalid`]
    /// 2. Expiry, `now >= exp` — failure is [`TokenError::Expired`]
    pub fn parse(&self, token: &str) -> Result<Claims, TokenError> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|_| TokenError::Invalid)?;

        let claims = token_data.claims;
        if claims.is_expired_at(Utc::now().timestamp()) {
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }
}
