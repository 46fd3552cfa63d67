//! # storefront-entity
//!
//! Domain entity models for the Meridian storefront. Every struct in this
//! crate represents a database table row or a domain value object. All
//! entities derive `Debug`, `Clone`, `Serialize`, `Deserialize`, and
//! database entities additionally derive `sqlx::FromRow`.

pub mod cart;
pub mod product;
pub mod user;
pub mod wishlist;
