//! Validation and authorization engine for marketplace mutations.
//!
//! Decides whether proposed creates, updates and deletes of users, ratings
//! and bonus packages are admissible before anything is persisted. The
//! centerpiece is the rating path: structural validation of the whole object
//! graph (rating → product → category/seller, rating → both users) followed
//! by the stateful eligibility rules: the auction must be over, the rater
//! must not have rated the product before, and only the seller and the
//! winning bidder may rate each other.
//!
//! Storage and diagnostics are injected collaborators ([`storage`] traits and
//! [`common::AuditSink`]); the engine never performs a write itself beyond
//! the single delegated call per accepted mutation, and it signals every
//! expected-input problem as a [`common::Rejection`] rather than a panic.

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod bonuses;
pub mod catalog;
pub mod common;
pub mod ratings;
pub mod storage;
pub mod users;

// ============================================================================
// CONVENIENCE RE-EXPORTS
// ============================================================================

pub use bonuses::{BonusPackage, BonusesService};
pub use catalog::{Category, Currency, Product};
pub use common::{AuditSink, Rejection};
pub use ratings::{Rating, RatingsService};
pub use users::{AccountType, User, UsersService};
