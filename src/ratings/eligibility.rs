// src/ratings/eligibility.rs
//! Stateful eligibility rules layered above structural validation.
//!
//! A rating is only admissible once the auction is over, at most once per
//! rater and product, and only between the two parties the auction actually
//! connected: the seller and the winning bidder.

use chrono::{DateTime, Utc};

use crate::catalog::models::Product;
use crate::users::models::User;

/// A product accepts ratings strictly after its end date; at `end_date`
/// itself the auction still counts as active.
pub fn auction_has_ended(product: &Product, now: DateTime<Utc>) -> bool {
    now > product.end_date
}

/// Whether the ordered pair (rating user, rated user) may exchange a rating
/// on an auction sold by `seller` and won by `winner`.
///
/// Admissible pairs are exactly (seller, winner) and (winner, seller). The
/// relation is symmetric but never reflexive: a user cannot rate themselves
/// even if they are recorded as both seller and winner.
pub fn pair_is_admissible(rating_user: &User, rated_user: &User, seller: &User, winner: &User) -> bool {
    if rating_user.id == rated_user.id {
        return false;
    }
    (rating_user.id == seller.id && rated_user.id == winner.id)
        || (rating_user.id == winner.id && rated_user.id == seller.id)
}
