//! User account data models

use serde::{Deserialize, Serialize};

use crate::common::generate_user_id;

/// Role tag carried by every account. Not consulted by the validation rules
/// themselves; rating eligibility is derived from the auction relationship,
/// not from the account type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    Buyer,
    Seller,
    Administrator,
}

/// Marketplace user account.
///
/// The engine validates users but never mutates them; the surrogate id is
/// assigned once at construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub phone_number: Option<String>,
    pub email: String,
    pub password: String,
    pub account_type: AccountType,
}

impl User {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        first_name: &str,
        last_name: &str,
        username: &str,
        phone_number: Option<&str>,
        email: &str,
        password: &str,
        account_type: AccountType,
    ) -> Self {
        Self {
            id: generate_user_id(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            username: username.to_string(),
            phone_number: phone_number.map(|p| p.to_string()),
            email: email.to_string(),
            password: password.to_string(),
            account_type,
        }
    }
}
