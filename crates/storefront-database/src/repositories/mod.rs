//! PostgreSQL repository implementations of the store traits.

pub mod cart;
pub mod product;
pub mod user;
pub mod wishlist;

pub use cart::CartRepository;
pub use product::ProductRepository;
pub use user::UserRepository;
pub use wishlist::WishlistRepository;
