use std::sync::Arc;

use chrono::Utc;

use super::eligibility::{auction_has_ended, pair_is_admissible};
use super::models::Rating;
use super::validators::RatingValidator;
use crate::common::{AuditSink, Rejection, Validator};
use crate::storage::RatingStore;

/// Mutation orchestrator for ratings.
///
/// Add runs the full rule chain in fixed priority order: null, structural
/// validity, auction ended, duplicate submission, seller/winner pairing,
/// then a single storage write. Rejection reasons are mutually exclusive;
/// the first rule that fails decides the outcome and emits the one audit
/// line for the call.
pub struct RatingsService {
    store: Arc<dyn RatingStore>,
    audit: Arc<dyn AuditSink>,
}

impl RatingsService {
    pub fn new(store: Arc<dyn RatingStore>, audit: Arc<dyn AuditSink>) -> Self {
        Self { store, audit }
    }

    fn reject(&self, message: &str, rejection: Rejection) -> Result<(), Rejection> {
        self.audit.warn(message);
        Err(rejection)
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    pub async fn add_rating(&self, rating: Option<&Rating>) -> Result<(), Rejection> {
        let Some(rating) = rating else {
            return self.reject("Attempted to add a null rating.", Rejection::MissingInput);
        };

        let check = RatingValidator.validate(rating);
        if !check.is_valid {
            return self.reject(
                &format!("Attempted to add an invalid rating. {}", check),
                Rejection::InvalidEntity,
            );
        }

        if !auction_has_ended(&rating.product, Utc::now()) {
            return self.reject(
                "Attempted to add rating on active auction.",
                Rejection::AuctionActive,
            );
        }

        // Duplicate takes precedence over the pairing check when both hold.
        if self
            .store
            .rating_by_user_and_product(&rating.rating_user.id, &rating.product.id)
            .await
            .is_some()
        {
            return self.reject(
                "Attempted to add rating again on an auction.",
                Rejection::DuplicateRating,
            );
        }

        let winner = self
            .store
            .winning_bid_user_by_product(&rating.product.id)
            .await;
        let admissible = winner
            .map(|w| pair_is_admissible(&rating.rating_user, &rating.rated_user, &rating.product.seller, &w))
            .unwrap_or(false);
        if !admissible {
            return self.reject(
                "Attempted to add rating to other user.",
                Rejection::IneligibleUser,
            );
        }

        if self.store.add(rating).await {
            Ok(())
        } else {
            Err(Rejection::StorageRefused)
        }
    }

    /// Updates an existing rating.
    ///
    /// Deliberately narrower than add: the auction-state, duplicate and
    /// pairing rules are not re-run. An update can only touch a rating that
    /// already cleared them, and existence by id is the gate here.
    pub async fn update_rating(&self, rating: Option<&Rating>) -> Result<(), Rejection> {
        let Some(rating) = rating else {
            return self.reject("Attempted to update a null rating.", Rejection::MissingInput);
        };

        let check = RatingValidator.validate(rating);
        if !check.is_valid {
            return self.reject(
                &format!("Attempted to update an invalid rating. {}", check),
                Rejection::InvalidEntity,
            );
        }

        if self.store.get_by_id(&rating.id).await.is_none() {
            return self.reject(
                "Attempted to update a nonexisting rating.",
                Rejection::DoesNotExist,
            );
        }

        if self.store.update(rating).await {
            Ok(())
        } else {
            Err(Rejection::StorageRefused)
        }
    }

    pub async fn delete_rating(&self, rating: Option<&Rating>) -> Result<(), Rejection> {
        let Some(rating) = rating else {
            return self.reject("Attempted to delete a null rating.", Rejection::MissingInput);
        };

        if self.store.get_by_id(&rating.id).await.is_none() {
            return self.reject(
                "Attempted to delete a nonexisting rating.",
                Rejection::DoesNotExist,
            );
        }

        if self.store.delete(rating).await {
            Ok(())
        } else {
            Err(Rejection::StorageRefused)
        }
    }

    // ========================================================================
    // Reads (pure delegation; absence is not an error)
    // ========================================================================

    pub async fn get_rating_by_id(&self, id: &str) -> Option<Rating> {
        self.store.get_by_id(id).await
    }

    pub async fn get_all_ratings(&self) -> Vec<Rating> {
        self.store.get_all().await
    }

    pub async fn get_ratings_by_user_id(&self, user_id: &str) -> Vec<Rating> {
        self.store.get_by_user_id(user_id).await
    }
}
