//! In-memory store implementations.
//!
//! Backed by dashmap, selected with `database.backend = "memory"`. Used by
//! the integration tests and for running the server without PostgreSQL.

pub mod cart;
pub mod product;
pub mod user;
pub mod wishlist;

pub use cart::MemoryCartStore;
pub use product::MemoryProductStore;
pub use user::MemoryUserStore;
pub use wishlist::MemoryWishlistStore;

use storefront_core::types::pagination::{PageRequest, PageResponse};

/// Paginate an already-sorted vector the way the SQL repositories do.
fn paginate<T: serde::Serialize>(all: Vec<T>, page: &PageRequest) -> PageResponse<T> {
    let total = all.len() as u64;
    let items = all
        .into_iter()
        .skip(page.offset() as usize)
        .take(page.limit() as usize)
        .collect();
    PageResponse::new(items, page.page, page.page_size, total)
}
