use std::sync::Arc;

use super::models::BonusPackage;
use super::validators::BonusValidator;
use crate::common::{AuditSink, Rejection, Validator};
use crate::storage::BonusStore;

/// Mutation orchestrator for bonus packages.
///
/// Add enforces name uniqueness through the store's probe; update and delete
/// gate on existence by id. Same rejection and audit discipline as the other
/// services.
pub struct BonusesService {
    store: Arc<dyn BonusStore>,
    audit: Arc<dyn AuditSink>,
}

impl BonusesService {
    pub fn new(store: Arc<dyn BonusStore>, audit: Arc<dyn AuditSink>) -> Self {
        Self { store, audit }
    }

    fn reject(&self, message: &str, rejection: Rejection) -> Result<(), Rejection> {
        self.audit.warn(message);
        Err(rejection)
    }

    pub async fn add_bonus(&self, bonus: Option<&BonusPackage>) -> Result<(), Rejection> {
        let Some(bonus) = bonus else {
            return self.reject(
                "Attempted to add a null bonus package.",
                Rejection::MissingInput,
            );
        };

        let check = BonusValidator.validate(bonus);
        if !check.is_valid {
            return self.reject(
                &format!("Attempted to add an invalid bonus package. {}", check),
                Rejection::InvalidEntity,
            );
        }

        if self.store.name_exists(&bonus.name).await {
            return self.reject(
                "Attempted to add an existing bonus package.",
                Rejection::AlreadyExists,
            );
        }

        if self.store.add(bonus).await {
            Ok(())
        } else {
            Err(Rejection::StorageRefused)
        }
    }

    pub async fn update_bonus(&self, bonus: Option<&BonusPackage>) -> Result<(), Rejection> {
        let Some(bonus) = bonus else {
            return self.reject(
                "Attempted to update a null bonus package.",
                Rejection::MissingInput,
            );
        };

        let check = BonusValidator.validate(bonus);
        if !check.is_valid {
            return self.reject(
                &format!("Attempted to update an invalid bonus package. {}", check),
                Rejection::InvalidEntity,
            );
        }

        if self.store.get_by_id(&bonus.id).await.is_none() {
            return self.reject(
                "Attempted to update a nonexisting bonus package.",
                Rejection::DoesNotExist,
            );
        }

        if self.store.update(bonus).await {
            Ok(())
        } else {
            Err(Rejection::StorageRefused)
        }
    }

    pub async fn delete_bonus(&self, bonus: Option<&BonusPackage>) -> Result<(), Rejection> {
        let Some(bonus) = bonus else {
            return self.reject(
                "Attempted to delete a null bonus package.",
                Rejection::MissingInput,
            );
        };

        if self.store.get_by_id(&bonus.id).await.is_none() {
            return self.reject(
                "Attempted to delete a nonexisting bonus package.",
                Rejection::DoesNotExist,
            );
        }

        if self.store.delete(bonus).await {
            Ok(())
        } else {
            Err(Rejection::StorageRefused)
        }
    }

    pub async fn get_bonus_by_id(&self, id: &str) -> Option<BonusPackage> {
        self.store.get_by_id(id).await
    }

    pub async fn get_all_bonuses(&self) -> Vec<BonusPackage> {
        self.store.get_all().await
    }
}
