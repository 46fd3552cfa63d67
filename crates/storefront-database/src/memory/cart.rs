//! In-memory shopping cart store.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use uuid::Uuid;

use storefront_core::result::AppResult;
use storefront_entity::cart::CartItem;

use crate::stores::CartStore;

/// Dashmap-backed shopping cart store keyed by (user, product).
#[derive(Debug, Default)]
pub struct MemoryCartStore {
    items: DashMap<(Uuid, Uuid), CartItem>,
}

impl MemoryCartStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CartStore for MemoryCartStore {
    async fn items(&self, user_id: Uuid) -> AppResult<Vec<CartItem>> {
        let mut items: Vec<CartItem> = self
            .items
            .iter()
            .filter(|e| e.key().0 == user_id)
            .map(|e| e.value().clone())
            .collect();
        items.sort_by(|a, b| a.added_at.cmp(&b.added_at));
        Ok(items)
    }

    async fn add_item(
        &self,
        user_id: Uuid,
        product_id: Uuid,
        quantity: i32,
    ) -> AppResult<CartItem> {
        let mut entry = self
            .items
            .entry((user_id, product_id))
            .and_modify(|item| item.quantity += quantity)
            .or_insert_with(|| CartItem {
                user_id,
                product_id,
                quantity,
                added_at: Utc::now(),
            });
        Ok(entry.value_mut().clone())
    }

    async fn set_quantity(
        &self,
        user_id: Uuid,
        product_id: Uuid,
        quantity: i32,
    ) -> AppResult<bool> {
        match self.items.get_mut(&(user_id, product_id)) {
            Some(mut entry) => {
                entry.value_mut().quantity = quantity;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn remove_item(&self, user_id: Uuid, product_id: Uuid) -> AppResult<bool> {
        Ok(self.items.remove(&(user_id, product_id)).is_some())
    }

    async fn clear(&self, user_id: Uuid) -> AppResult<u64> {
        let keys: Vec<(Uuid, Uuid)> = self
            .items
            .iter()
            .filter(|e| e.key().0 == user_id)
            .map(|e| *e.key())
            .collect();

        let mut removed = 0;
        for key in keys {
            if self.items.remove(&key).is_some() {
                removed += 1;
            }
        }
        Ok(removed)
    }
}
