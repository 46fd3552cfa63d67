//! Axum middleware stack.
//!
//! The request pipeline is `resolve_identity -> authorize -> handler`, with
//! the error responder wrapped around all of it.

pub mod authorize;
pub mod cors;
pub mod errors;
pub mod identity;
pub mod logging;
