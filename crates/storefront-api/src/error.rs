//! Maps domain `AppError` values to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use storefront_core::error::{AppError, ErrorKind};

use crate::i18n::{self, Locale};

/// Standard API error response body.
///
/// Every client-visible failure is this shape, JSON-encoded; there is no
/// HTML error page anywhere in the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Localized generic title.
    pub error: String,
    /// Specific failure message.
    pub message: String,
    /// The request path, filled in by the error responder.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// Newtype carrying an [`AppError`] out of a handler.
///
/// Handlers return `Result<_, ApiError>`; the `?` operator converts from
/// `AppError` via `From`.
#[derive(Debug, Clone)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

/// HTTP status for an error kind.
///
/// `Conflict` intentionally maps to 400: the signup contract reports a
/// duplicate email as a bad request.
pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::Validation | ErrorKind::Conflict => StatusCode::BAD_REQUEST,
        ErrorKind::Authentication => StatusCode::UNAUTHORIZED,
        ErrorKind::Authorization => StatusCode::FORBIDDEN,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::Internal
        | ErrorKind::Database
        | ErrorKind::Configuration
        | ErrorKind::Serialization => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = status_for(self.0.kind);
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(kind = %self.0.kind, error = %self.0.message, "Internal server error");
        }

        let body = ErrorBody {
            error: i18n::error_title(self.0.kind, Locale::En).to_string(),
            message: self.0.message.clone(),
            path: None,
        };

        // The error responder middleware rewrites this response with the
        // request path and the negotiated locale; the extension carries the
        // domain error out to it.
        let mut response = (status, Json(body)).into_response();
        response.extensions_mut().insert(self.0);
        response
    }
}

/// Builds the final localized error response.
///
/// The forbidden message is substituted centrally so no 403 can leak which
/// role a route required.
pub fn localized_response(err: &AppError, path: &str, locale: Locale) -> Response {
    let status = status_for(err.kind);

    let message = match err.kind {
        ErrorKind::Authorization => i18n::forbidden_message(locale).to_string(),
        _ => err.message.clone(),
    };

    let body = ErrorBody {
        error: i18n::error_title(err.kind, locale).to_string(),
        message,
        path: Some(path.to_string()),
    };

    (status, Json(body)).into_response()
}
