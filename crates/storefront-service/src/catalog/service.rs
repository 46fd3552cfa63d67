//! Product catalog operations.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use storefront_core::error::AppError;
use storefront_core::result::AppResult;
use storefront_core::types::pagination::{PageRequest, PageResponse};
use storefront_database::stores::ProductStore;
use storefront_entity::product::{NewProduct, Product, ProductUpdate};

/// Handles catalog browsing and administrative product management.
#[derive(Clone)]
pub struct CatalogService {
    /// Product store.
    products: Arc<dyn ProductStore>,
}

impl CatalogService {
    /// Creates a new catalog service.
    pub fn new(products: Arc<dyn ProductStore>) -> Self {
        Self { products }
    }

    /// Lists products, newest first.
    pub async fn list(&self, page: &PageRequest) -> AppResult<PageResponse<Product>> {
        self.products.find_all(page).await
    }

    /// Fetches a single product.
    pub async fn get(&self, id: Uuid) -> AppResult<Product> {
        self.products
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Product {id} not found")))
    }

    /// Creates a new product.
    pub async fn create(&self, data: NewProduct) -> AppResult<Product> {
        if data.name.trim().is_empty() {
            return Err(AppError::validation("Product name cannot be empty"));
        }
        if data.price_cents < 0 {
            return Err(AppError::validation("Product price cannot be negative"));
        }

        let product = self.products.create(&data).await?;
        info!(product_id = %product.id, name = %product.name, "Product created");
        Ok(product)
    }

    /// Applies a partial update to a product.
    pub async fn update(&self, id: Uuid, data: ProductUpdate) -> AppResult<Product> {
        if let Some(name) = &data.name {
            if name.trim().is_empty() {
                return Err(AppError::validation("Product name cannot be empty"));
            }
        }
        if let Some(price_cents) = data.price_cents {
            if price_cents < 0 {
                return Err(AppError::validation("Product price cannot be negative"));
            }
        }

        let product = self
            .products
            .update(id, &data)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Product {id} not found")))?;

        info!(product_id = %product.id, "Product updated");
        Ok(product)
    }

    /// Deletes a product.
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        if !self.products.delete(id).await? {
            return Err(AppError::not_found(format!("Product {id} not found")));
        }
        info!(product_id = %id, "Product deleted");
        Ok(())
    }
}
