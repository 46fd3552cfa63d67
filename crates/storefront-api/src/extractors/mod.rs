//! Custom Axum extractors.

pub mod auth;
pub mod locale;
pub mod pagination;

pub use auth::CurrentUser;
pub use pagination::PaginationParams;
