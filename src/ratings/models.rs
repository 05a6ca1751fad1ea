//! Rating data model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::models::Product;
use crate::common::generate_rating_id;
use crate::users::models::User;

/// Post-auction rating exchanged between the seller and the winning bidder.
///
/// Carries its full object graph: the rated product (with category and
/// seller), the rater and the ratee. Structural validation descends into all
/// of them; eligibility is decided against the auction state in storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rating {
    pub id: String,
    pub product: Product,
    pub rating_user: User,
    pub rated_user: User,
    pub grade: i32,
    pub created_at: DateTime<Utc>,
}

impl Rating {
    pub fn new(product: Product, rating_user: User, rated_user: User, grade: i32) -> Self {
        Self {
            id: generate_rating_id(),
            product,
            rating_user,
            rated_user,
            grade,
            created_at: Utc::now(),
        }
    }
}
