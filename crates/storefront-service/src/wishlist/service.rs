//! Wishlist operations.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use storefront_auth::Principal;
use storefront_core::error::AppError;
use storefront_core::result::AppResult;
use storefront_database::stores::{ProductStore, WishlistStore};
use storefront_entity::product::Product;

/// Handles a user's wishlist.
#[derive(Clone)]
pub struct WishlistService {
    /// Wishlist store.
    wishlists: Arc<dyn WishlistStore>,
    /// Product store, for existence checks and detail lookups.
    products: Arc<dyn ProductStore>,
}

impl WishlistService {
    /// Creates a new wishlist service.
    pub fn new(wishlists: Arc<dyn WishlistStore>, products: Arc<dyn ProductStore>) -> Self {
        Self {
            wishlists,
            products,
        }
    }

    /// Lists the principal's wishlist as full product records, oldest first.
    /// Rows whose product has since been deleted are dropped.
    pub async fn list(&self, principal: &Principal) -> AppResult<Vec<Product>> {
        let rows = self.wishlists.items(principal.user_id).await?;

        let mut products = Vec::with_capacity(rows.len());
        for row in rows {
            if let Some(product) = self.products.find_by_id(row.product_id).await? {
                products.push(product);
            }
        }
        Ok(products)
    }

    /// Adds a product to the wishlist. Adding an already-present product is
    /// a no-op.
    pub async fn add(&self, principal: &Principal, product_id: Uuid) -> AppResult<()> {
        if self.products.find_by_id(product_id).await?.is_none() {
            return Err(AppError::not_found(format!("Product {product_id} not found")));
        }

        let added = self.wishlists.add(principal.user_id, product_id).await?;
        if added {
            info!(user_id = %principal.user_id, product_id = %product_id, "Wishlist item added");
        }
        Ok(())
    }

    /// Removes a product from the wishlist.
    pub async fn remove(&self, principal: &Principal, product_id: Uuid) -> AppResult<()> {
        let removed = self.wishlists.remove(principal.user_id, product_id).await?;
        if !removed {
            return Err(AppError::not_found(format!(
                "Product {product_id} is not in the wishlist"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::error::ErrorKind;
    use storefront_database::memory::{MemoryProductStore, MemoryWishlistStore};
    use storefront_database::stores::ProductStore;
    use storefront_entity::product::NewProduct;
    use storefront_entity::user::Role;

    fn principal() -> Principal {
        Principal {
            user_id: Uuid::new_v4(),
            email: "shopper@example.com".to_string(),
            roles: vec![Role::User],
        }
    }

    async fn service_with_product() -> (WishlistService, Uuid) {
        let products = Arc::new(MemoryProductStore::new());
        let product = products
            .create(&NewProduct {
                name: "Linen throw".to_string(),
                description: None,
                price_cents: 4_500,
                image_url: None,
            })
            .await
            .unwrap();

        let service = WishlistService::new(Arc::new(MemoryWishlistStore::new()), products);
        (service, product.id)
    }

    #[tokio::test]
    async fn test_add_is_idempotent() {
        let (service, product_id) = service_with_product().await;
        let me = principal();

        service.add(&me, product_id).await.unwrap();
        service.add(&me, product_id).await.unwrap();

        assert_eq!(service.list(&me).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_remove_missing_is_not_found() {
        let (service, _) = service_with_product().await;
        let err = service
            .remove(&principal(), Uuid::new_v4())
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }
}
