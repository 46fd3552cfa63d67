//! # storefront-database
//!
//! Store traits and their concrete implementations: PostgreSQL repositories
//! for production and dashmap-backed in-memory stores for development and
//! tests. The backend is selected by `DatabaseConfig::backend`.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod repositories;
pub mod stores;

pub use stores::{CartStore, ProductStore, Stores, UserStore, WishlistStore};
