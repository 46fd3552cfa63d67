//! Wishlist service.

pub mod service;

pub use service::WishlistService;
