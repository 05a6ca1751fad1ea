//! End-to-end rating scenarios over the in-memory stores.
//!
//! Walks the full lifecycle: accounts are registered through the users
//! service, an auction settles, and the two parties exchange ratings while
//! outsiders and re-submissions are turned away.

use std::sync::Arc;

use chrono::{Duration, Utc};

use auction_engine::catalog::models::{Category, Currency, Product};
use auction_engine::common::{RecordingAuditSink, Rejection, TracingAuditSink};
use auction_engine::ratings::models::Rating;
use auction_engine::ratings::RatingsService;
use auction_engine::storage::{MemoryRatingStore, MemoryUserStore};
use auction_engine::users::models::{AccountType, User};
use auction_engine::users::UsersService;
use tracing_subscriber::EnvFilter;

/// Honors RUST_LOG when the suite runs; later calls are no-ops.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .try_init();
}

fn account(first: &str, last: &str, username: &str, email: &str, role: AccountType) -> User {
    User::new(first, last, username, None, email, "Parola12!", role)
}

struct Marketplace {
    users: UsersService,
    ratings: RatingsService,
    rating_store: Arc<MemoryRatingStore>,
    audit: Arc<RecordingAuditSink>,
}

fn marketplace() -> Marketplace {
    let user_store = Arc::new(MemoryUserStore::new());
    let rating_store = Arc::new(MemoryRatingStore::new());
    let audit = Arc::new(RecordingAuditSink::new());
    Marketplace {
        users: UsersService::new(user_store, audit.clone()),
        ratings: RatingsService::new(rating_store.clone(), audit.clone()),
        rating_store,
        audit,
    }
}

fn ended_product(seller: &User, days_ago: i64) -> Product {
    let end = Utc::now() - Duration::days(days_ago);
    Product::new(
        "Oak writing desk",
        "Restored early-1900s desk, minor scratches",
        Category::new("Furniture", None),
        40.0,
        Currency::Ron,
        seller.clone(),
        end - Duration::days(14),
        end,
    )
}

#[tokio::test]
async fn settled_auction_full_rating_exchange() {
    init_tracing();
    let m = marketplace();

    let seller = account("Sorin", "Enache", "sorin.e", "sorin@example.com", AccountType::Seller);
    let winner = account("Vlad", "Georgescu", "vlad.g", "vlad@example.com", AccountType::Buyer);
    let outsider = account("Radu", "Toma", "radu.t", "radu@example.com", AccountType::Buyer);
    for user in [&seller, &winner, &outsider] {
        m.users.add_user(Some(user)).await.unwrap();
    }

    // Auction ended 5 days ago, won by `winner`
    let product = ended_product(&seller, 5);
    m.rating_store.set_winning_bidder(&product.id, &winner).await;

    // Seller rates the winner
    let first = Rating::new(product.clone(), seller.clone(), winner.clone(), 8);
    assert_eq!(m.ratings.add_rating(Some(&first)).await, Ok(()));

    // Re-submitting for the same (seller, product) pair is a duplicate,
    // regardless of ratee or grade
    let resubmit = Rating::new(product.clone(), seller.clone(), winner.clone(), 2);
    assert_eq!(
        m.ratings.add_rating(Some(&resubmit)).await,
        Err(Rejection::DuplicateRating)
    );
    assert_eq!(
        m.audit.last_line().as_deref(),
        Some("Attempted to add rating again on an auction.")
    );

    // An uninvolved account cannot rate the seller even though it has no
    // duplicate on record
    let intrusion = Rating::new(product.clone(), outsider.clone(), seller.clone(), 9);
    assert_eq!(
        m.ratings.add_rating(Some(&intrusion)).await,
        Err(Rejection::IneligibleUser)
    );
    assert_eq!(
        m.audit.last_line().as_deref(),
        Some("Attempted to add rating to other user.")
    );

    // The winner's rating in the other direction still goes through
    let reply = Rating::new(product.clone(), winner.clone(), seller.clone(), 10);
    assert_eq!(m.ratings.add_rating(Some(&reply)).await, Ok(()));

    let all = m.ratings.get_all_ratings().await;
    assert_eq!(all.len(), 2);
    assert_eq!(m.ratings.get_ratings_by_user_id(&winner.id).await.len(), 1);
}

#[tokio::test]
async fn tracing_sink_wiring_rejects_without_a_recorder() {
    init_tracing();
    // Production wiring: rejections go to the subscriber via TracingAuditSink
    // and still come back as the same tagged results.
    let store = Arc::new(MemoryRatingStore::new());
    let ratings = RatingsService::new(store.clone(), Arc::new(TracingAuditSink));

    assert_eq!(ratings.add_rating(None).await, Err(Rejection::MissingInput));

    let seller = account("Sorin", "Enache", "sorin.e", "sorin@example.com", AccountType::Seller);
    let winner = account("Vlad", "Georgescu", "vlad.g", "vlad@example.com", AccountType::Buyer);
    let product = ended_product(&seller, 5);
    store.set_winning_bidder(&product.id, &winner).await;

    let accepted = Rating::new(product, seller, winner, 8);
    assert_eq!(ratings.add_rating(Some(&accepted)).await, Ok(()));
    assert_eq!(store.write_calls(), 1);
}

#[tokio::test]
async fn active_auction_blocks_both_parties() {
    init_tracing();
    let m = marketplace();
    let seller = account("Sorin", "Enache", "sorin.e", "sorin@example.com", AccountType::Seller);
    let winner = account("Vlad", "Georgescu", "vlad.g", "vlad@example.com", AccountType::Buyer);

    // Ends in 3 days
    let product = ended_product(&seller, -3);
    m.rating_store.set_winning_bidder(&product.id, &winner).await;

    for (rater, rated) in [(&seller, &winner), (&winner, &seller)] {
        let candidate = Rating::new(product.clone(), (*rater).clone(), (*rated).clone(), 7);
        assert_eq!(
            m.ratings.add_rating(Some(&candidate)).await,
            Err(Rejection::AuctionActive)
        );
        assert_eq!(
            m.audit.last_line().as_deref(),
            Some("Attempted to add rating on active auction.")
        );
    }
    assert!(m.ratings.get_all_ratings().await.is_empty());
}

#[tokio::test]
async fn structural_rejection_reaches_no_collaborator_write() {
    init_tracing();
    let m = marketplace();
    let seller = account("Sorin", "Enache", "sorin.e", "sorin@example.com", AccountType::Seller);
    let winner = account("Vlad", "Georgescu", "vlad.g", "vlad@example.com", AccountType::Buyer);
    let product = ended_product(&seller, 5);
    m.rating_store.set_winning_bidder(&product.id, &winner).await;

    let mut candidate = Rating::new(product, seller, winner, 8);
    candidate.rating_user.email = "broken".to_string();

    assert_eq!(
        m.ratings.add_rating(Some(&candidate)).await,
        Err(Rejection::InvalidEntity)
    );
    assert_eq!(m.rating_store.write_calls(), 0);
    let line = m.audit.last_line().unwrap();
    assert!(line.starts_with("Attempted to add an invalid rating."));
    assert!(line.contains("rating_user.email"));
}
