//! Auth handlers — login, signup, and identity introspection.

use axum::Json;
use axum::extract::State;

use storefront_auth::authenticator::NewAccount;
use storefront_core::error::{AppError, ErrorKind};

use crate::dto::request::{LoginRequest, SignupRequest};
use crate::dto::response::{LoginResponse, PrincipalResponse, SignupResponse};
use crate::dto::validate_request;
use crate::error::ApiError;
use crate::extractors::CurrentUser;
use crate::i18n::{self, Locale};
use crate::state::AppState;

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    locale: Locale,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    validate_request(&req)?;

    let user = state
        .authenticator
        .authenticate(&req.email, &req.password)
        .await
        .map_err(|e| match e.kind {
            ErrorKind::Authentication => {
                AppError::authentication(i18n::bad_credentials_message(locale))
            }
            _ => e,
        })?;

    let issued = state.jwt_encoder.issue(&user.email)?;
    let expires_in_millis = issued.expires_in_millis();

    Ok(Json(LoginResponse {
        token: issued.token,
        expires_in_millis,
    }))
}

/// POST /api/auth/signup
pub async fn signup(
    State(state): State<AppState>,
    locale: Locale,
    Json(req): Json<SignupRequest>,
) -> Result<Json<SignupResponse>, ApiError> {
    validate_request(&req)?;

    let email = req.email.clone();
    let user = state
        .authenticator
        .signup(NewAccount {
            email: req.email,
            username: req.username,
            firstname: req.firstname,
            password: req.password,
        })
        .await
        .map_err(|e| match e.kind {
            ErrorKind::Conflict => {
                AppError::conflict(i18n::duplicate_email_message(locale, &email))
            }
            _ => e,
        })?;

    Ok(Json(SignupResponse {
        username: user.username,
        firstname: user.firstname,
        email: user.email,
    }))
}

/// GET /api/auth/me
pub async fn me(current: CurrentUser) -> Json<PrincipalResponse> {
    let CurrentUser(principal) = current;
    Json(PrincipalResponse {
        email: principal.email,
        roles: principal.roles,
    })
}
