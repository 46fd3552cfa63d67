//! Store traits and the backend-dispatching aggregate.
//!
//! Every trait here is an external collaborator boundary: the auth core and
//! the services depend only on these traits, never on a concrete backend.

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use storefront_core::config::DatabaseConfig;
use storefront_core::error::AppError;
use storefront_core::result::AppResult;
use storefront_core::types::pagination::{PageRequest, PageResponse};
use storefront_entity::cart::CartItem;
use storefront_entity::product::{NewProduct, Product, ProductUpdate};
use storefront_entity::user::{CreateUser, Role, User};
use storefront_entity::wishlist::WishlistItem;

use crate::connection;
use crate::memory;
use crate::migration;
use crate::repositories;

/// Credential store: user lookup and creation.
///
/// `create` is the authority on email uniqueness. Callers may perform an
/// optimistic existence check first, but only the store's constraint closes
/// the check-then-insert race; a duplicate insert surfaces as a conflict
/// error.
#[async_trait]
pub trait UserStore: Send + Sync + 'static {
    /// Find a user by primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;

    /// Find a user by email (case-insensitive).
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// List all users with pagination, newest first.
    async fn find_all(&self, page: &PageRequest) -> AppResult<PageResponse<User>>;

    /// Create a new user. Fails with a conflict error on duplicate email.
    async fn create(&self, data: &CreateUser) -> AppResult<User>;

    /// Replace a user's role set. Takes effect on the next request, since
    /// roles are re-read from the store rather than carried in tokens.
    async fn update_roles(&self, id: Uuid, roles: &[Role]) -> AppResult<User>;

    /// Count total users.
    async fn count(&self) -> AppResult<u64>;
}

/// Product catalog store.
#[async_trait]
pub trait ProductStore: Send + Sync + 'static {
    /// Find a product by primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Product>>;

    /// List products with pagination, newest first.
    async fn find_all(&self, page: &PageRequest) -> AppResult<PageResponse<Product>>;

    /// Create a new product.
    async fn create(&self, data: &NewProduct) -> AppResult<Product>;

    /// Apply a partial update. Returns `None` if the product does not exist.
    async fn update(&self, id: Uuid, data: &ProductUpdate) -> AppResult<Option<Product>>;

    /// Delete a product. Returns `true` if a row was removed.
    async fn delete(&self, id: Uuid) -> AppResult<bool>;
}

/// Per-user shopping cart store.
#[async_trait]
pub trait CartStore: Send + Sync + 'static {
    /// All cart rows for a user, oldest first.
    async fn items(&self, user_id: Uuid) -> AppResult<Vec<CartItem>>;

    /// Add units of a product to the cart, summing with any existing row.
    async fn add_item(&self, user_id: Uuid, product_id: Uuid, quantity: i32)
    -> AppResult<CartItem>;

    /// Replace the quantity of an existing row. Returns `false` if absent.
    async fn set_quantity(&self, user_id: Uuid, product_id: Uuid, quantity: i32)
    -> AppResult<bool>;

    /// Remove a row. Returns `false` if absent.
    async fn remove_item(&self, user_id: Uuid, product_id: Uuid) -> AppResult<bool>;

    /// Remove all rows for a user. Returns the number removed.
    async fn clear(&self, user_id: Uuid) -> AppResult<u64>;
}

/// Per-user wishlist store.
#[async_trait]
pub trait WishlistStore: Send + Sync + 'static {
    /// All wishlist rows for a user, oldest first.
    async fn items(&self, user_id: Uuid) -> AppResult<Vec<WishlistItem>>;

    /// Add a product. Returns `false` if it was already present.
    async fn add(&self, user_id: Uuid, product_id: Uuid) -> AppResult<bool>;

    /// Remove a product. Returns `false` if absent.
    async fn remove(&self, user_id: Uuid, product_id: Uuid) -> AppResult<bool>;
}

/// Aggregate of all stores, constructed once at startup and shared.
#[derive(Clone)]
pub struct Stores {
    /// Credential store.
    pub users: Arc<dyn UserStore>,
    /// Product catalog store.
    pub products: Arc<dyn ProductStore>,
    /// Shopping cart store.
    pub carts: Arc<dyn CartStore>,
    /// Wishlist store.
    pub wishlists: Arc<dyn WishlistStore>,
}

impl Stores {
    /// Connect the backend named by the configuration.
    ///
    /// The `postgres` backend creates a connection pool and runs migrations;
    /// the `memory` backend starts empty.
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        match config.backend.as_str() {
            "postgres" => {
                let pool = connection::create_pool(config).await?;
                migration::run_migrations(&pool).await?;
                Ok(Self::postgres(pool))
            }
            "memory" => Ok(Self::in_memory()),
            other => Err(AppError::configuration(format!(
                "Unknown database backend '{other}'. Expected 'postgres' or 'memory'"
            ))),
        }
    }

    /// Build the PostgreSQL-backed store set over an existing pool.
    pub fn postgres(pool: sqlx::PgPool) -> Self {
        Self {
            users: Arc::new(repositories::user::UserRepository::new(pool.clone())),
            products: Arc::new(repositories::product::ProductRepository::new(pool.clone())),
            carts: Arc::new(repositories::cart::CartRepository::new(pool.clone())),
            wishlists: Arc::new(repositories::wishlist::WishlistRepository::new(pool)),
        }
    }

    /// Build an empty in-memory store set.
    pub fn in_memory() -> Self {
        Self {
            users: Arc::new(memory::user::MemoryUserStore::new()),
            products: Arc::new(memory::product::MemoryProductStore::new()),
            carts: Arc::new(memory::cart::MemoryCartStore::new()),
            wishlists: Arc::new(memory::wishlist::MemoryWishlistStore::new()),
        }
    }
}
