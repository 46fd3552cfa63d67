//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use storefront_auth::authenticator::Authenticator;
use storefront_auth::jwt::{JwtDecoder, JwtEncoder};
use storefront_auth::password::{PasswordHasher, PasswordValidator};
use storefront_auth::policy::RoutePolicyTable;
use storefront_core::config::AppConfig;
use storefront_database::stores::Stores;
use storefront_service::cart::CartService;
use storefront_service::catalog::CatalogService;
use storefront_service::wishlist::WishlistService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. All fields are
/// `Arc`-wrapped for cheap cloning across tasks and are immutable after
/// startup.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// All store backends.
    pub stores: Stores,
    /// Bearer token issuer.
    pub jwt_encoder: Arc<JwtEncoder>,
    /// Bearer token validator.
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Credential verification and signup.
    pub authenticator: Arc<Authenticator>,
    /// Static route-protection table.
    pub policy: Arc<RoutePolicyTable>,
    /// Product catalog service.
    pub catalog_service: Arc<CatalogService>,
    /// Shopping cart service.
    pub cart_service: Arc<CartService>,
    /// Wishlist service.
    pub wishlist_service: Arc<WishlistService>,
}

impl AppState {
    /// Wires the full dependency graph over the given stores.
    ///
    /// Used by both the server binary and the integration tests so the two
    /// never drift apart.
    pub fn new(config: Arc<AppConfig>, stores: Stores) -> Self {
        let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
        let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));

        let authenticator = Arc::new(Authenticator::new(
            Arc::clone(&stores.users),
            PasswordHasher::new(),
            PasswordValidator::new(&config.auth),
        ));

        let catalog_service = Arc::new(CatalogService::new(Arc::clone(&stores.products)));
        let cart_service = Arc::new(CartService::new(
            Arc::clone(&stores.carts),
            Arc::clone(&stores.products),
        ));
        let wishlist_service = Arc::new(WishlistService::new(
            Arc::clone(&stores.wishlists),
            Arc::clone(&stores.products),
        ));

        Self {
            config,
            stores,
            jwt_encoder,
            jwt_decoder,
            authenticator,
            policy: Arc::new(crate::router::route_policy()),
            catalog_service,
            cart_service,
            wishlist_service,
        }
    }
}
