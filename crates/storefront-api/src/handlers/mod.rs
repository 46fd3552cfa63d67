//! HTTP request handlers.

pub mod admin;
pub mod auth;
pub mod cart;
pub mod health;
pub mod product;
pub mod wishlist;
