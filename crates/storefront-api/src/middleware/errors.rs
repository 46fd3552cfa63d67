//! Error responder middleware.
//!
//! The outermost stage of the pipeline. Any response carrying an
//! [`AppError`] extension — an authorization denial or a handler failure —
//! is rewritten into the standard `{error, message, path}` JSON body with
//! the title localized from `Accept-Language`.

use axum::extract::Request;
use axum::http::header;
use axum::middleware::Next;
use axum::response::Response;

use storefront_core::error::AppError;

use crate::error;
use crate::i18n::Locale;

/// Rewrites error responses with the request path and negotiated locale.
pub async fn respond_with_errors(request: Request, next: Next) -> Response {
    let path = request.uri().path().to_string();
    let locale = Locale::from_accept_language(
        request
            .headers()
            .get(header::ACCEPT_LANGUAGE)
            .and_then(|v| v.to_str().ok()),
    );

    let response = next.run(request).await;

    match response.extensions().get::<AppError>().cloned() {
        Some(err) => error::localized_response(&err, &path, locale),
        None => response,
    }
}
