// src/users/mod.rs

pub mod models;
pub mod services;
pub mod validators;


// Re-export commonly used items
pub use models::{AccountType, User};
pub use services::UsersService;
pub use validators::UserValidator;
