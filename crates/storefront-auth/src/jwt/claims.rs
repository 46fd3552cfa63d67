//! JWT claims structure carried by every bearer token.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// JWT claims payload.
///
/// The token deliberately carries only the subject and the two timestamps.
/// Roles are *not* encoded: they are re-read from the credential store on
/// every request so role changes take effect immediately.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject — the user's email.
    pub sub: String,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

impl Claims {
    /// Returns the expiration as a `DateTime<Utc>`.
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or_else(Utc::now)
    }

    /// Whether this token is expired at the given instant.
    ///
    /// The boundary is inclusive: a token is expired at exactly `exp`.
    pub fn is_expired_at(&self, now: i64) -> bool {
        now >= self.exp
    }

    /// Whether this token is expired right now.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now().timestamp())
    }
}
