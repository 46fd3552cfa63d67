//! # storefront-auth
//!
//! The authentication and authorization core of the Meridian storefront.
//!
//! ## Modules
//!
//! - `jwt` — stateless bearer token encoding and validation
//! - `password` — Argon2id password hashing and signup password policy
//! - `authenticator` — credential verification and account signup
//! - `principal` — the per-request resolved identity
//! - `policy` — route-pattern based authorization decisions
//! - `seed` — idempotent bootstrap of the administrator account

pub mod authenticator;
pub mod jwt;
pub mod password;
pub mod policy;
pub mod principal;
pub mod seed;

pub use authenticator::Authenticator;
pub use jwt::{Claims, IssuedToken, JwtDecoder, JwtEncoder, TokenError};
pub use password::{PasswordHasher, PasswordValidator};
pub use policy::{AccessDecision, AccessRequirement, RoutePolicyTable};
pub use principal::{IdentityFailure, Principal, ResolvedIdentity};
