// In-memory stores backing the test suite

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{BonusStore, RatingStore, UserStore};
use crate::bonuses::models::BonusPackage;
use crate::ratings::models::Rating;
use crate::users::models::User;

/// In-memory user store keyed by id.
///
/// `add` is an insert-if-absent under a single write lock, matching the
/// atomicity the services require from any real storage implementation.
#[derive(Default)]
pub struct MemoryUserStore {
    users: RwLock<HashMap<String, User>>,
    writes: AtomicUsize,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of add/update/delete calls received, successful or not.
    pub fn write_calls(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn add(&self, user: &User) -> bool {
        self.writes.fetch_add(1, Ordering::SeqCst);
        let mut users = self.users.write().await;
        if users.contains_key(&user.id) {
            return false;
        }
        users.insert(user.id.clone(), user.clone());
        true
    }

    async fn update(&self, user: &User) -> bool {
        self.writes.fetch_add(1, Ordering::SeqCst);
        let mut users = self.users.write().await;
        if !users.contains_key(&user.id) {
            return false;
        }
        users.insert(user.id.clone(), user.clone());
        true
    }

    async fn delete(&self, user: &User) -> bool {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.users.write().await.remove(&user.id).is_some()
    }

    async fn get_by_id(&self, id: &str) -> Option<User> {
        self.users.read().await.get(id).cloned()
    }

    async fn get_all(&self) -> Vec<User> {
        self.users.read().await.values().cloned().collect()
    }

    async fn get_by_email_and_password(&self, email: &str, password: &str) -> Option<User> {
        self.users
            .read()
            .await
            .values()
            .find(|u| u.email == email && u.password == password)
            .cloned()
    }

    async fn email_exists(&self, email: &str) -> bool {
        self.users.read().await.values().any(|u| u.email == email)
    }

    async fn username_exists(&self, username: &str) -> bool {
        self.users
            .read()
            .await
            .values()
            .any(|u| u.username == username)
    }
}

/// In-memory rating store keyed by id, with a side table of winning bids
/// populated by the test fixtures through [`set_winning_bidder`].
///
/// [`set_winning_bidder`]: MemoryRatingStore::set_winning_bidder
#[derive(Default)]
pub struct MemoryRatingStore {
    ratings: RwLock<HashMap<String, Rating>>,
    winning_bids: RwLock<HashMap<String, User>>,
    writes: AtomicUsize,
}

impl MemoryRatingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write_calls(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Records the auction winner for a product. Stands in for the bidding
    /// subsystem, which is outside this engine.
    pub async fn set_winning_bidder(&self, product_id: &str, user: &User) {
        self.winning_bids
            .write()
            .await
            .insert(product_id.to_string(), user.clone());
    }
}

#[async_trait]
impl RatingStore for MemoryRatingStore {
    async fn add(&self, rating: &Rating) -> bool {
        self.writes.fetch_add(1, Ordering::SeqCst);
        let mut ratings = self.ratings.write().await;
        // Insert-if-absent over the (rating user, product) key, under the
        // same lock the duplicate probe reads through.
        let duplicate = ratings.values().any(|r| {
            r.rating_user.id == rating.rating_user.id && r.product.id == rating.product.id
        });
        if duplicate || ratings.contains_key(&rating.id) {
            return false;
        }
        ratings.insert(rating.id.clone(), rating.clone());
        true
    }

    async fn update(&self, rating: &Rating) -> bool {
        self.writes.fetch_add(1, Ordering::SeqCst);
        let mut ratings = self.ratings.write().await;
        if !ratings.contains_key(&rating.id) {
            return false;
        }
        ratings.insert(rating.id.clone(), rating.clone());
        true
    }

    async fn delete(&self, rating: &Rating) -> bool {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.ratings.write().await.remove(&rating.id).is_some()
    }

    async fn get_by_id(&self, id: &str) -> Option<Rating> {
        self.ratings.read().await.get(id).cloned()
    }

    async fn get_all(&self) -> Vec<Rating> {
        self.ratings.read().await.values().cloned().collect()
    }

    async fn get_by_user_id(&self, user_id: &str) -> Vec<Rating> {
        self.ratings
            .read()
            .await
            .values()
            .filter(|r| r.rating_user.id == user_id)
            .cloned()
            .collect()
    }

    async fn rating_by_user_and_product(&self, user_id: &str, product_id: &str) -> Option<Rating> {
        self.ratings
            .read()
            .await
            .values()
            .find(|r| r.rating_user.id == user_id && r.product.id == product_id)
            .cloned()
    }

    async fn winning_bid_user_by_product(&self, product_id: &str) -> Option<User> {
        self.winning_bids.read().await.get(product_id).cloned()
    }
}

/// In-memory bonus package store keyed by id, unique by name.
#[derive(Default)]
pub struct MemoryBonusStore {
    bonuses: RwLock<HashMap<String, BonusPackage>>,
    writes: AtomicUsize,
}

impl MemoryBonusStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write_calls(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BonusStore for MemoryBonusStore {
    async fn add(&self, bonus: &BonusPackage) -> bool {
        self.writes.fetch_add(1, Ordering::SeqCst);
        let mut bonuses = self.bonuses.write().await;
        let name_taken = bonuses.values().any(|b| b.name == bonus.name);
        if name_taken || bonuses.contains_key(&bonus.id) {
            return false;
        }
        bonuses.insert(bonus.id.clone(), bonus.clone());
        true
    }

    async fn update(&self, bonus: &BonusPackage) -> bool {
        self.writes.fetch_add(1, Ordering::SeqCst);
        let mut bonuses = self.bonuses.write().await;
        if !bonuses.contains_key(&bonus.id) {
            return false;
        }
        bonuses.insert(bonus.id.clone(), bonus.clone());
        true
    }

    async fn delete(&self, bonus: &BonusPackage) -> bool {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.bonuses.write().await.remove(&bonus.id).is_some()
    }

    async fn get_by_id(&self, id: &str) -> Option<BonusPackage> {
        self.bonuses.read().await.get(id).cloned()
    }

    async fn get_all(&self) -> Vec<BonusPackage> {
        self.bonuses.read().await.values().cloned().collect()
    }

    async fn name_exists(&self, name: &str) -> bool {
        self.bonuses.read().await.values().any(|b| b.name == name)
    }
}
