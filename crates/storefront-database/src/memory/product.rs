//! In-memory product catalog store.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use uuid::Uuid;

use storefront_core::result::AppResult;
use storefront_core::types::pagination::{PageRequest, PageResponse};
use storefront_entity::product::{NewProduct, Product, ProductUpdate};

use crate::stores::ProductStore;

/// Dashmap-backed product catalog store.
#[derive(Debug, Default)]
pub struct MemoryProductStore {
    products: DashMap<Uuid, Product>,
}

impl MemoryProductStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductStore for MemoryProductStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Product>> {
        Ok(self.products.get(&id).map(|p| p.clone()))
    }

    async fn find_all(&self, page: &PageRequest) -> AppResult<PageResponse<Product>> {
        let mut all: Vec<Product> = self.products.iter().map(|e| e.value().clone()).collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(super::paginate(all, page))
    }

    async fn create(&self, data: &NewProduct) -> AppResult<Product> {
        let now = Utc::now();
        let product = Product {
            id: Uuid::new_v4(),
            name: data.name.clone(),
            description: data.description.clone(),
            price_cents: data.price_cents,
            image_url: data.image_url.clone(),
            created_at: now,
            updated_at: now,
        };
        self.products.insert(product.id, product.clone());
        Ok(product)
    }

    async fn update(&self, id: Uuid, data: &ProductUpdate) -> AppResult<Option<Product>> {
        let mut entry = match self.products.get_mut(&id) {
            Some(entry) => entry,
            None => return Ok(None),
        };

        let product = entry.value_mut();
        if let Some(name) = &data.name {
            product.name = name.clone();
        }
        if let Some(description) = &data.description {
            product.description = Some(description.clone());
        }
        if let Some(price_cents) = data.price_cents {
            product.price_cents = price_cents;
        }
        if let Some(image_url) = &data.image_url {
            product.image_url = Some(image_url.clone());
        }
        product.updated_at = Utc::now();

        Ok(Some(product.clone()))
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        Ok(self.products.remove(&id).is_some())
    }
}
