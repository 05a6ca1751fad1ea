//! # Storage Module
//!
//! Contracts for the data-access collaborators the mutation services depend
//! on, one trait per entity kind, plus an in-memory reference implementation
//! used by the test suite.
//!
//! The engine never opens a transaction of its own: `add` is required to
//! behave as an atomic insert-if-absent over the entity's uniqueness key, so
//! the read-then-decide checks in the services cannot be the only line of
//! defense against concurrent writers.

pub mod memory;

use async_trait::async_trait;

use crate::bonuses::models::BonusPackage;
use crate::ratings::models::Rating;
use crate::users::models::User;

pub use memory::{MemoryBonusStore, MemoryRatingStore, MemoryUserStore};

/// Persistence and lookup for user accounts.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn add(&self, user: &User) -> bool;
    async fn update(&self, user: &User) -> bool;
    async fn delete(&self, user: &User) -> bool;
    async fn get_by_id(&self, id: &str) -> Option<User>;
    async fn get_all(&self) -> Vec<User>;
    async fn get_by_email_and_password(&self, email: &str, password: &str) -> Option<User>;
    async fn email_exists(&self, email: &str) -> bool;
    async fn username_exists(&self, username: &str) -> bool;
}

/// Persistence, lookup and relationship probes for ratings.
#[async_trait]
pub trait RatingStore: Send + Sync {
    async fn add(&self, rating: &Rating) -> bool;
    async fn update(&self, rating: &Rating) -> bool;
    async fn delete(&self, rating: &Rating) -> bool;
    async fn get_by_id(&self, id: &str) -> Option<Rating>;
    async fn get_all(&self) -> Vec<Rating>;
    /// Ratings submitted by the given user, across all products.
    async fn get_by_user_id(&self, user_id: &str) -> Vec<Rating>;
    /// The rating the given user already submitted for the given product,
    /// if any. Keyed lookup backing the duplicate-submission check.
    async fn rating_by_user_and_product(&self, user_id: &str, product_id: &str) -> Option<Rating>;
    /// The user whose bid won the given product's auction, if the auction
    /// produced a winner.
    async fn winning_bid_user_by_product(&self, product_id: &str) -> Option<User>;
}

/// Persistence and lookup for promotional bonus packages.
#[async_trait]
pub trait BonusStore: Send + Sync {
    async fn add(&self, bonus: &BonusPackage) -> bool;
    async fn update(&self, bonus: &BonusPackage) -> bool;
    async fn delete(&self, bonus: &BonusPackage) -> bool;
    async fn get_by_id(&self, id: &str) -> Option<BonusPackage>;
    async fn get_all(&self) -> Vec<BonusPackage>;
    async fn name_exists(&self, name: &str) -> bool;
}
