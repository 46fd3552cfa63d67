//! In-memory wishlist store.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use uuid::Uuid;

use storefront_core::result::AppResult;
use storefront_entity::wishlist::WishlistItem;

use crate::stores::WishlistStore;

/// Dashmap-backed wishlist store keyed by (user, product).
#[derive(Debug, Default)]
pub struct MemoryWishlistStore {
    items: DashMap<(Uuid, Uuid), WishlistItem>,
}

impl MemoryWishlistStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl WishlistStore for MemoryWishlistStore {
    async fn items(&self, user_id: Uuid) -> AppResult<Vec<WishlistItem>> {
        let mut items: Vec<WishlistItem> = self
            .items
            .iter()
            .filter(|e| e.key().0 == user_id)
            .map(|e| e.value().clone())
            .collect();
        items.sort_by(|a, b| a.added_at.cmp(&b.added_at));
        Ok(items)
    }

    async fn add(&self, user_id: Uuid, product_id: Uuid) -> AppResult<bool> {
        match self.items.entry((user_id, product_id)) {
            Entry::Occupied(_) => Ok(false),
            Entry::Vacant(slot) => {
                slot.insert(WishlistItem {
                    user_id,
                    product_id,
                    added_at: Utc::now(),
                });
                Ok(true)
            }
        }
    }

    async fn remove(&self, user_id: Uuid, product_id: Uuid) -> AppResult<bool> {
        Ok(self.items.remove(&(user_id, product_id)).is_some())
    }
}
