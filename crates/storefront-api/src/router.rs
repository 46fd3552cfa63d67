//! Route definitions and the static route-protection table.
//!
//! All routes are organized by domain and mounted under `/api`. The policy
//! table lives beside the route declarations: protection is declared per
//! prefix, and any route not listed is public by design, so every protected
//! route must be enumerated here.

use axum::{
    Router, middleware as axum_middleware,
    routing::{delete, get, post, put},
};
use tower_http::trace::TraceLayer;

use storefront_auth::policy::{AccessRequirement, RoutePolicyTable};
use storefront_core::error::AppError;
use storefront_entity::user::Role;

use crate::error::ApiError;
use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// The static route-protection table, read-only after startup.
pub fn route_policy() -> RoutePolicyTable {
    RoutePolicyTable::new()
        .route("/api/auth/me", AccessRequirement::Authenticated)
        .route("/api/auth/**", AccessRequirement::Public)
        .route("/api/products/**", AccessRequirement::Public)
        .route("/api/cart/**", AccessRequirement::Authenticated)
        .route("/api/wishlist/**", AccessRequirement::Authenticated)
        .route(
            "/api/admin/**",
            AccessRequirement::RequireRoles(vec![Role::Admin]),
        )
        .route("/api/health", AccessRequirement::Public)
}

/// Build the complete Axum router with all routes and middleware.
///
/// Request flow: logging → CORS → trace → error responder →
/// identity resolver → authorization → handler.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(product_routes())
        .merge(cart_routes())
        .merge(wishlist_routes())
        .merge(admin_routes())
        .merge(health_routes());

    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        .fallback(fallback)
        // Layer order: the last layer added is the outermost.
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::authorize::authorize,
        ))
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::identity::resolve_identity,
        ))
        .layer(axum_middleware::from_fn(
            middleware::errors::respond_with_errors,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Auth endpoints: login, signup, identity introspection.
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/signup", post(handlers::auth::signup))
        .route("/auth/me", get(handlers::auth::me))
}

/// Public catalog browsing.
fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(handlers::product::list_products))
        .route("/products/{id}", get(handlers::product::get_product))
}

/// Shopping cart endpoints.
fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/cart", get(handlers::cart::get_cart))
        .route("/cart", delete(handlers::cart::clear_cart))
        .route("/cart/items", post(handlers::cart::add_item))
        .route("/cart/items/{product_id}", put(handlers::cart::update_item))
        .route(
            "/cart/items/{product_id}",
            delete(handlers::cart::remove_item),
        )
}

/// Wishlist endpoints.
fn wishlist_routes() -> Router<AppState> {
    Router::new()
        .route("/wishlist", get(handlers::wishlist::get_wishlist))
        .route(
            "/wishlist/{product_id}",
            post(handlers::wishlist::add_item),
        )
        .route(
            "/wishlist/{product_id}",
            delete(handlers::wishlist::remove_item),
        )
}

/// Admin-only endpoints.
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/products", post(handlers::product::create_product))
        .route(
            "/admin/products/{id}",
            put(handlers::product::update_product),
        )
        .route(
            "/admin/products/{id}",
            delete(handlers::product::delete_product),
        )
        .route("/admin/users", get(handlers::admin::list_users))
}

/// Health endpoints.
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}

/// JSON 404 for unmatched routes; the API never serves an HTML error page.
async fn fallback(uri: axum::http::Uri) -> ApiError {
    ApiError(AppError::not_found(format!("No route for {}", uri.path())))
}
