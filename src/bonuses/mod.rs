// src/bonuses/mod.rs

pub mod models;
pub mod services;
pub mod validators;


// Re-export commonly used items
pub use models::BonusPackage;
pub use services::BonusesService;
pub use validators::BonusValidator;
