//! # Catalog Module
//!
//! Auction products and their categories. These entities are validated as
//! sub-entities of ratings and on their own; their persistence lifecycle
//! belongs to the bidding subsystem, outside this engine.

pub mod models;
pub mod validators;

#[cfg(test)]
mod tests;

pub use models::{Category, Currency, Product};
pub use validators::{CategoryValidator, ProductValidator};
