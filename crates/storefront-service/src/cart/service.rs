//! Shopping cart operations.

use std::sync::Arc;

use tracing::{debug, info};
use uuid::Uuid;

use storefront_auth::Principal;
use storefront_core::error::AppError;
use storefront_core::result::AppResult;
use storefront_database::stores::{CartStore, ProductStore};
use storefront_entity::cart::{Cart, CartLine};

/// Handles a user's shopping cart.
#[derive(Clone)]
pub struct CartService {
    /// Cart store.
    carts: Arc<dyn CartStore>,
    /// Product store, for existence checks and price lookups.
    products: Arc<dyn ProductStore>,
}

impl CartService {
    /// Creates a new cart service.
    pub fn new(carts: Arc<dyn CartStore>, products: Arc<dyn ProductStore>) -> Self {
        Self { carts, products }
    }

    /// Returns the principal's cart with line totals computed from current
    /// product prices. Rows whose product has since been deleted are
    /// silently dropped.
    pub async fn view(&self, principal: &Principal) -> AppResult<Cart> {
        let rows = self.carts.items(principal.user_id).await?;

        let mut lines = Vec::with_capacity(rows.len());
        for row in rows {
            match self.products.find_by_id(row.product_id).await? {
                Some(product) => {
                    let line_total_cents = product.price_cents * row.quantity as i64;
                    lines.push(CartLine {
                        product,
                        quantity: row.quantity,
                        line_total_cents,
                    });
                }
                None => {
                    debug!(product_id = %row.product_id, "Dropping cart row for deleted product");
                }
            }
        }

        Ok(Cart::from_lines(lines))
    }

    /// Adds units of a product to the cart, summing with any existing row.
    pub async fn add_item(
        &self,
        principal: &Principal,
        product_id: Uuid,
        quantity: i32,
    ) -> AppResult<Cart> {
        if quantity < 1 {
            return Err(AppError::validation("Quantity must be at least 1"));
        }
        if self.products.find_by_id(product_id).await?.is_none() {
            return Err(AppError::not_found(format!("Product {product_id} not found")));
        }

        self.carts
            .add_item(principal.user_id, product_id, quantity)
            .await?;

        info!(user_id = %principal.user_id, product_id = %product_id, quantity, "Cart item added");
        self.view(principal).await
    }

    /// Replaces the quantity of an existing cart row.
    pub async fn set_quantity(
        &self,
        principal: &Principal,
        product_id: Uuid,
        quantity: i32,
    ) -> AppResult<Cart> {
        if quantity < 1 {
            return Err(AppError::validation("Quantity must be at least 1"));
        }

        let updated = self
            .carts
            .set_quantity(principal.user_id, product_id, quantity)
            .await?;
        if !updated {
            return Err(AppError::not_found(format!(
                "Product {product_id} is not in the cart"
            )));
        }

        self.view(principal).await
    }

    /// Removes a product from the cart.
    pub async fn remove_item(&self, principal: &Principal, product_id: Uuid) -> AppResult<Cart> {
        let removed = self
            .carts
            .remove_item(principal.user_id, product_id)
            .await?;
        if !removed {
            return Err(AppError::not_found(format!(
                "Product {product_id} is not in the cart"
            )));
        }

        self.view(principal).await
    }

    /// Empties the cart.
    pub async fn clear(&self, principal: &Principal) -> AppResult<u64> {
        let removed = self.carts.clear(principal.user_id).await?;
        info!(user_id = %principal.user_id, removed, "Cart cleared");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::error::ErrorKind;
    use storefront_database::memory::{MemoryCartStore, MemoryProductStore};
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

    async fn service_with_product() -> (CartService, Uuid) {
        let products = Arc::new(MemoryProductStore::new());
        let product = products
            .create(&NewProduct {
                name: "Ceramic mug".to_string(),
                description: None,
                price_cents: 1_200,
                image_url: None,
            })
            .await
            .unwrap();

        let service = CartService::new(Arc::new(MemoryCartStore::new()), products);
        (service, product.id)
    }

    #[tokio::test]
    async fn test_add_and_view_computes_totals() {
        let (service, product_id) = service_with_product().await;
        let me = principal();

        let cart = service.add_item(&me, product_id, 3).await.unwrap();

        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].line_total_cents, 3_600);
        assert_eq!(cart.total_cents, 3_600);
    }

    #[tokio::test]
    async fn test_add_unknown_product_is_not_found() {
        let (service, _) = service_with_product().await;
        let err = service
            .add_item(&principal(), Uuid::new_v4(), 1)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_set_quantity_replaces() {
        let (service, product_id) = service_with_product().await;
        let me = principal();

        service.add_item(&me, product_id, 2).await.unwrap();
        let cart = service.set_quantity(&me, product_id, 5).await.unwrap();

        assert_eq!(cart.items[0].quantity, 5);
    }

    #[tokio::test]
    async fn test_clear_empties_cart() {
        let (service, product_id) = service_with_product().await;
        let me = principal();

        service.add_item(&me, product_id, 2).await.unwrap();
        assert_eq!(service.clear(&me).await.unwrap(), 1);

        let cart = service.view(&me).await.unwrap();
        assert!(cart.items.is_empty());
        assert_eq!(cart.total_cents, 0);
    }
}
