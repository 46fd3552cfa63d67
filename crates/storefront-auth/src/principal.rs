//! The per-request resolved identity.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_entity::user::{Role, User};

/// The resolved identity for one request: who is acting, with which roles.
///
/// Owned by the request's processing lifetime. Built once by the identity
/// resolver, read-only afterwards, and discarded when the request completes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Principal {
    /// The authenticated user's ID.
    pub user_id: Uuid,
    /// The authenticated user's email (the token subject).
    pub email: String,
    /// The user's *current* roles, re-read from the credential store.
    pub roles: Vec<Role>,
}

impl Principal {
    /// Builds a principal from a freshly loaded user record.
    pub fn from_user(user: &User) -> Self {
        Self {
            user_id: user.id,
            email: user.email.clone(),
            roles: user.roles.clone(),
        }
    }

    /// Whether the principal holds the given role.
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    /// Whether the principal holds any of the given roles.
    pub fn has_any_role(&self, roles: &[Role]) -> bool {
        roles.iter().any(|r| self.has_role(*r))
    }
}

/// Why identity resolution yielded no principal.
///
/// Recorded for logging and for the 401 message; never aborts the request
/// pipeline. `UnknownSubject` is deliberately not client-distinguishable
/// from an invalid token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IdentityFailure {
    /// The presented token is past its expiry.
    TokenExpired,
    /// The presented token is malformed or forged.
    TokenInvalid,
    /// The token subject no longer resolves to a user.
    UnknownSubject,
}

/// The outcome of identity resolution, attached to every request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResolvedIdentity {
    /// The principal, if a valid credential resolved to a live user.
    pub principal: Option<Principal>,
    /// The failure reason, if a credential was presented but rejected.
    pub failure: Option<IdentityFailure>,
}

impl ResolvedIdentity {
    /// No credential was presented.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// A credential was presented and resolved to a principal.
    pub fn authenticated(principal: Principal) -> Self {
        Self {
            principal: Some(principal),
            failure: None,
        }
    }

    /// A credential was presented but rejected.
    pub fn failed(failure: IdentityFailure) -> Self {
        Self {
            principal: None,
            failure: Some(failure),
        }
    }
}
