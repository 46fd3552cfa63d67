//! # storefront-api
//!
//! HTTP API layer for the Meridian storefront built on Axum.
//!
//! Every request flows through the same pipeline: the identity resolver
//! attaches a [`ResolvedIdentity`] (best-effort, never fails the request),
//! the authorization middleware consults the static route policy, and the
//! error responder turns every denial or handler failure into a localized
//! structured JSON body.
//!
//! [`ResolvedIdentity`]: storefront_auth::ResolvedIdentity

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod i18n;
pub mod middleware;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
