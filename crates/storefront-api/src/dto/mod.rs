//! Request and response DTOs.

pub mod request;
pub mod response;

use validator::Validate;

use storefront_core::error::AppError;

use crate::error::ApiError;

/// Runs derive-based validation on a request DTO.
pub fn validate_request(req: &impl Validate) -> Result<(), ApiError> {
    req.validate()
        .map_err(|e| ApiError(AppError::validation(e.to_string())))
}
