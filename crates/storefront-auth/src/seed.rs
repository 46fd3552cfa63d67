//! Idempotent bootstrap of the administrator account.

use std::sync::Arc;

use tracing::{debug, info};

use storefront_core::config::AuthConfig;
use storefront_core::error::ErrorKind;
use storefront_core::result::AppResult;
use storefront_database::stores::UserStore;
use storefront_entity::user::{CreateUser, Role};

use crate::password::PasswordHasher;

/// Ensures the configured administrator account exists.
///
/// Runs at startup, before the server accepts traffic. Safe to run
/// repeatedly; a concurrent seed from another instance is absorbed via the
/// store's uniqueness constraint.
pub async fn ensure_seed_admin(
    users: &Arc<dyn UserStore>,
    hasher: &PasswordHasher,
    config: &AuthConfig,
) -> AppResult<()> {
    if users.find_by_email(&config.seed_admin_email).await?.is_some() {
        debug!(email = %config.seed_admin_email, "Seed admin already present");
        return Ok(());
    }

    let password_hash = hasher.hash_password(&config.seed_admin_password)?;

    match users
        .create(&CreateUser {
            email: config.seed_admin_email.clone(),
            username: "admin".to_string(),
            firstname: "Admin".to_string(),
            password_hash,
            roles: vec![Role::User, Role::Admin],
        })
        .await
    {
        Ok(user) => {
            info!(user_id = %user.id, email = %user.email, "Seed admin created");
            Ok(())
        }
        Err(e) if e.kind == ErrorKind::Conflict => Ok(()),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_database::memory::MemoryUserStore;
    use storefront_database::stores::UserStore;

    #[tokio::test]
    async fn test_seed_is_idempotent() {
        let users: Arc<dyn UserStore> = Arc::new(MemoryUserStore::new());
        let hasher = PasswordHasher::new();
        let config = AuthConfig::default();

        ensure_seed_admin(&users, &hasher, &config).await.unwrap();
        ensure_seed_admin(&users, &hasher, &config).await.unwrap();

        assert_eq!(users.count().await.unwrap(), 1);

        let admin = users
            .find_by_email("admin@admin.com")
            .await
            .unwrap()
            .unwrap();
        assert!(admin.roles.contains(&Role::Admin));
        assert!(admin.roles.contains(&Role::User));
    }
}
