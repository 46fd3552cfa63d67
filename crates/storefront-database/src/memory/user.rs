//! In-memory credential store.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use uuid::Uuid;

use storefront_core::error::AppError;
use storefront_core::result::AppResult;
use storefront_core::types::pagination::{PageRequest, PageResponse};
use storefront_entity::user::{CreateUser, Role, User};

use crate::stores::UserStore;

/// Dashmap-backed credential store.
///
/// The email index is the uniqueness authority: inserts go through
/// `DashMap::entry`, so two concurrent creates with the same email resolve
/// to exactly one winner, mirroring the database unique index.
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    users: DashMap<Uuid, User>,
    /// Lowercased email -> user id.
    email_index: DashMap<String, Uuid>,
}

impl MemoryUserStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        Ok(self.users.get(&id).map(|u| u.clone()))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let id = match self.email_index.get(&email.to_lowercase()) {
            Some(entry) => *entry.value(),
            None => return Ok(None),
        };
        Ok(self.users.get(&id).map(|u| u.clone()))
    }

    async fn find_all(&self, page: &PageRequest) -> AppResult<PageResponse<User>> {
        let mut all: Vec<User> = self.users.iter().map(|e| e.value().clone()).collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(super::paginate(all, page))
    }

    async fn create(&self, data: &CreateUser) -> AppResult<User> {
        let id = Uuid::new_v4();
        match self.email_index.entry(data.email.to_lowercase()) {
            Entry::Occupied(_) => Err(AppError::conflict(format!(
                "Email '{}' is already in use",
                data.email
            ))),
            Entry::Vacant(slot) => {
                let now = Utc::now();
                let user = User {
                    id,
                    email: data.email.clone(),
                    username: data.username.clone(),
                    firstname: data.firstname.clone(),
                    password_hash: data.password_hash.clone(),
                    roles: data.roles.clone(),
                    created_at: now,
                    updated_at: now,
                };
                slot.insert(id);
                self.users.insert(id, user.clone());
                Ok(user)
            }
        }
    }

    async fn update_roles(&self, id: Uuid, roles: &[Role]) -> AppResult<User> {
        if roles.is_empty() {
            return Err(AppError::validation("Role set cannot be empty"));
        }

        match self.users.get_mut(&id) {
            Some(mut entry) => {
                let user = entry.value_mut();
                user.roles = roles.to_vec();
                user.updated_at = Utc::now();
                Ok(user.clone())
            }
            None => Err(AppError::not_found(format!("User {id} not found"))),
        }
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.users.len() as u64)
    }
}
