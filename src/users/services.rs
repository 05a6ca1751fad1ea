use std::sync::Arc;

use super::models::User;
use super::validators::UserValidator;
use crate::common::{AuditSink, Rejection, Validator};
use crate::storage::UserStore;

/// Mutation orchestrator for user accounts.
///
/// Sequences null-check, structural validation, uniqueness probes and the
/// final delegation to storage. Every refusal emits exactly one audit line
/// and comes back as a [`Rejection`]; nothing in here panics on bad input.
pub struct UsersService {
    store: Arc<dyn UserStore>,
    audit: Arc<dyn AuditSink>,
}

impl UsersService {
    pub fn new(store: Arc<dyn UserStore>, audit: Arc<dyn AuditSink>) -> Self {
        Self { store, audit }
    }

    fn reject(&self, message: &str, rejection: Rejection) -> Result<(), Rejection> {
        self.audit.warn(message);
        Err(rejection)
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    pub async fn add_user(&self, user: Option<&User>) -> Result<(), Rejection> {
        let Some(user) = user else {
            return self.reject("Attempted to add a null user.", Rejection::MissingInput);
        };

        let check = UserValidator.validate(user);
        if !check.is_valid {
            return self.reject(
                &format!("Attempted to add an invalid user. {}", check),
                Rejection::InvalidEntity,
            );
        }

        if self.store.email_exists(&user.email).await
            || self.store.username_exists(&user.username).await
        {
            return self.reject("Attempted to add an existing user.", Rejection::AlreadyExists);
        }

        if self.store.add(user).await {
            Ok(())
        } else {
            Err(Rejection::StorageRefused)
        }
    }

    pub async fn update_user(&self, user: Option<&User>) -> Result<(), Rejection> {
        let Some(user) = user else {
            return self.reject("Attempted to update a null user.", Rejection::MissingInput);
        };

        let check = UserValidator.validate(user);
        if !check.is_valid {
            return self.reject(
                &format!("Attempted to update an invalid user. {}", check),
                Rejection::InvalidEntity,
            );
        }

        if self.store.get_by_id(&user.id).await.is_none() {
            return self.reject(
                "Attempted to update a nonexisting user.",
                Rejection::DoesNotExist,
            );
        }

        if self.store.update(user).await {
            Ok(())
        } else {
            Err(Rejection::StorageRefused)
        }
    }

    pub async fn delete_user(&self, user: Option<&User>) -> Result<(), Rejection> {
        let Some(user) = user else {
            return self.reject("Attempted to delete a null user.", Rejection::MissingInput);
        };

        if self.store.get_by_id(&user.id).await.is_none() {
            return self.reject(
                "Attempted to delete a nonexisting user.",
                Rejection::DoesNotExist,
            );
        }

        if self.store.delete(user).await {
            Ok(())
        } else {
            Err(Rejection::StorageRefused)
        }
    }

    // ========================================================================
    // Reads (pure delegation; absence is not an error)
    // ========================================================================

    pub async fn get_user_by_id(&self, id: &str) -> Option<User> {
        self.store.get_by_id(id).await
    }

    pub async fn get_all_users(&self) -> Vec<User> {
        self.store.get_all().await
    }

    pub async fn get_user_by_email_and_password(
        &self,
        email: &str,
        password: &str,
    ) -> Option<User> {
        self.store.get_by_email_and_password(email, password).await
    }
}
