//! # storefront-service
//!
//! Business services for the Meridian storefront: product catalog, shopping
//! cart, and wishlist. Services consume the [`Principal`] the auth core
//! resolves and contain no authorization logic of their own — route
//! protection is decided by the policy table before a handler runs.
//!
//! [`Principal`]: storefront_auth::Principal

pub mod cart;
pub mod catalog;
pub mod wishlist;

pub use cart::CartService;
pub use catalog::CatalogService;
pub use wishlist::WishlistService;
