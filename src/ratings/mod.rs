//! # Ratings Module
//!
//! The core of the engine: structural validation of the full rating object
//! graph plus the stateful eligibility rules (auction ended, no duplicate,
//! seller/winning-bidder pairing) and the mutation orchestrator that
//! sequences them.

pub mod eligibility;
pub mod models;
pub mod services;
pub mod validators;

#[cfg(test)]
mod tests;

pub use models::Rating;
pub use services::RatingsService;
pub use validators::RatingValidator;
