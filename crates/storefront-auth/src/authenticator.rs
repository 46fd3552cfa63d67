//! Credential verification and account signup.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use storefront_core::error::AppError;
use storefront_core::result::AppResult;
use storefront_database::stores::UserStore;
use storefront_entity::user::{CreateUser, Role, User};

use crate::password::{PasswordHasher, PasswordValidator};

/// Data required to open a new account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAccount {
    /// Login email.
    pub email: String,
    /// Public display name.
    pub username: String,
    /// Given name.
    pub firstname: String,
    /// Plaintext password, hashed before storage.
    pub password: String,
}

/// Verifies credentials against the credential store and opens accounts.
#[derive(Clone)]
pub struct Authenticator {
    /// Credential store.
    users: Arc<dyn UserStore>,
    /// Password hasher.
    hasher: PasswordHasher,
    /// Signup password policy.
    validator: PasswordValidator,
}

impl Authenticator {
    /// Creates a new authenticator.
    pub fn new(users: Arc<dyn UserStore>, hasher: PasswordHasher, validator: PasswordValidator) -> Self {
        Self {
            users,
            hasher,
            validator,
        }
    }

    /// Verifies an email/password pair and returns the matching user.
    ///
    /// Unknown email and wrong password collapse into one undifferentiated
    /// failure: the error must not reveal whether the email exists.
    pub async fn authenticate(&self, email: &str, password: &str) -> AppResult<User> {
        let user = match self.users.find_by_email(email).await? {
            Some(user) => user,
            None => return Err(Self::bad_credentials()),
        };

        if self.hasher.verify_password(password, &user.password_hash)? {
            Ok(user)
        } else {
            Err(Self::bad_credentials())
        }
    }

    /// Opens a new account with the default role.
    ///
    /// The existence check here is optimistic: two concurrent signups with
    /// the same email can both pass it. The store's uniqueness constraint is
    /// the authority that prevents duplicates, and its conflict error uses
    /// the same message as the check.
    pub async fn signup(&self, account: NewAccount) -> AppResult<User> {
        self.validator.validate(&account.password)?;

        if self.users.find_by_email(&account.email).await?.is_some() {
            return Err(Self::duplicate_email(&account.email));
        }

        let password_hash = self.hasher.hash_password(&account.password)?;

        let user = self
            .users
            .create(&CreateUser {
                email: account.email,
                username: account.username,
                firstname: account.firstname,
                password_hash,
                roles: vec![Role::User],
            })
            .await?;

        info!(user_id = %user.id, email = %user.email, "New account created");
        Ok(user)
    }

    fn bad_credentials() -> AppError {
        AppError::authentication("Invalid email or password")
    }

    fn duplicate_email(email: &str) -> AppError {
        AppError::conflict(format!("Email '{email}' is already in use"))
    }
}
