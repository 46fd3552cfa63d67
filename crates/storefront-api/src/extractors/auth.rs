//! `CurrentUser` extractor — reads the principal resolved by the identity
//! middleware.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use storefront_auth::principal::{Principal, ResolvedIdentity};
use storefront_core::error::AppError;

use crate::error::ApiError;
use crate::i18n;

/// The authenticated principal for the current request.
///
/// Handlers on policy-protected routes use this to learn *who* is acting;
/// the route policy has already decided *whether* they may. The rejection
/// here is a backstop for handlers mounted without a policy entry.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub Principal);

impl std::ops::Deref for CurrentUser {
    type Target = Principal;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S: Send + Sync> FromRequestParts<S> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let principal = parts
            .extensions
            .get::<ResolvedIdentity>()
            .and_then(|resolved| resolved.principal.clone());

        match principal {
            Some(principal) => Ok(Self(principal)),
            None => Err(ApiError(AppError::authentication(
                i18n::authentication_required_message(i18n::Locale::En),
            ))),
        }
    }
}
