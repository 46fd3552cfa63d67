//! Request identity resolution middleware.
//!
//! Best-effort by design: every failure here collapses to "no principal"
//! and the request continues, so public routes keep working with a bad or
//! expired token present. Only the authorization middleware produces
//! client-visible denials.

use axum::extract::{Request, State};
use axum::http::{HeaderMap, header};
use axum::middleware::Next;
use axum::response::Response;
use tracing::{debug, warn};

use storefront_auth::jwt::TokenError;
use storefront_auth::principal::{IdentityFailure, Principal, ResolvedIdentity};

use crate::state::AppState;

/// Resolves the caller's identity and attaches it to the request.
pub async fn resolve_identity(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let resolved = resolve(&state, request.headers()).await;

    if let Some(failure) = resolved.failure {
        debug!(?failure, path = %request.uri().path(), "Identity resolution yielded no principal");
    }

    request.extensions_mut().insert(resolved);
    next.run(request).await
}

async fn resolve(state: &AppState, headers: &HeaderMap) -> ResolvedIdentity {
    // A missing or non-Bearer Authorization header is anonymity, not an
    // error.
    let token = match bearer_token(headers) {
        Some(token) => token,
        None => return ResolvedIdentity::anonymous(),
    };

    let claims = match state.jwt_decoder.parse(token) {
        Ok(claims) => claims,
        Err(TokenError::Expired) => return ResolvedIdentity::failed(IdentityFailure::TokenExpired),
        Err(TokenError::Invalid) => return ResolvedIdentity::failed(IdentityFailure::TokenInvalid),
    };

    // Reload the user so role changes since issuance take effect
    // immediately.
    match state.stores.users.find_by_email(&claims.sub).await {
        Ok(Some(user)) => ResolvedIdentity::authenticated(Principal::from_user(&user)),
        Ok(None) => ResolvedIdentity::failed(IdentityFailure::UnknownSubject),
        Err(e) => {
            warn!(error = %e, "Credential store lookup failed during identity resolution");
            ResolvedIdentity::failed(IdentityFailure::UnknownSubject)
        }
    }
}

/// Extracts the token from `Authorization: Bearer <token>`.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_bearer_token_extraction() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Bearer abc.def.ghi"),
        );
        assert_eq!(bearer_token(&headers), Some("abc.def.ghi"));
    }

    #[test]
    fn test_missing_header_is_none() {
        assert_eq!(bearer_token(&HeaderMap::new()), None);
    }

    #[test]
    fn test_malformed_scheme_is_none() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Basic dXNlcjpwYXNz"),
        );
        assert_eq!(bearer_token(&headers), None);
    }
}
