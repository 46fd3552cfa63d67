//! Authorization middleware.
//!
//! Consults the static route policy with the identity resolved earlier in
//! the pipeline. Authentication is checked before roles: a missing
//! principal on a role-gated route yields 401, never 403.

use axum::extract::{Request, State};
use axum::http::header;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use storefront_auth::policy::AccessDecision;
use storefront_auth::principal::{IdentityFailure, ResolvedIdentity};
use storefront_core::error::AppError;

use crate::error::ApiError;
use crate::i18n::{self, Locale};
use crate::state::AppState;

/// Enforces the route policy for every request.
pub async fn authorize(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let resolved = request
        .extensions()
        .get::<ResolvedIdentity>()
        .cloned()
        .unwrap_or_default();

    let decision = state
        .policy
        .decide(request.uri().path(), resolved.principal.as_ref());

    match decision {
        AccessDecision::Allow => next.run(request).await,
        AccessDecision::DenyUnauthenticated => {
            let locale = locale_of(&request);
            let message = match resolved.failure {
                None => i18n::authentication_required_message(locale),
                Some(IdentityFailure::TokenExpired) => i18n::token_expired_message(locale),
                // An unknown subject is deliberately reported like any other
                // unusable token.
                Some(IdentityFailure::TokenInvalid) | Some(IdentityFailure::UnknownSubject) => {
                    i18n::token_invalid_message(locale)
                }
            };
            ApiError(AppError::authentication(message)).into_response()
        }
        AccessDecision::DenyForbidden => {
            let locale = locale_of(&request);
            ApiError(AppError::authorization(i18n::forbidden_message(locale))).into_response()
        }
    }
}

fn locale_of(request: &Request) -> Locale {
    Locale::from_accept_language(
        request
            .headers()
            .get(header::ACCEPT_LANGUAGE)
            .and_then(|v| v.to_str().ok()),
    )
}
