//! Auction catalog data models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::{generate_category_id, generate_product_id};
use crate::users::models::User;

/// Currency an auction is denominated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Ron,
    Eur,
    Usd,
    Gbp,
}

/// Product category, optionally nested under a parent.
///
/// Validation only checks the category's own name; parent chains are not
/// traversed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub parent: Option<Box<Category>>,
}

impl Category {
    pub fn new(name: &str, parent: Option<Category>) -> Self {
        Self {
            id: generate_category_id(),
            name: name.to_string(),
            parent: parent.map(Box::new),
        }
    }
}

/// Auctioned product. The auction is active between `start_date` and
/// `end_date` and counts as ended once the current time passes `end_date`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: Category,
    pub starting_price: f64,
    pub currency: Currency,
    pub seller: User,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub created_at: Option<DateTime<Utc>>,
    pub terminated_at: Option<DateTime<Utc>>,
}

impl Product {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: &str,
        description: &str,
        category: Category,
        starting_price: f64,
        currency: Currency,
        seller: User,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: generate_product_id(),
            name: name.to_string(),
            description: description.to_string(),
            category,
            starting_price,
            currency,
            seller,
            start_date,
            end_date,
            created_at: Some(Utc::now()),
            terminated_at: None,
        }
    }
}
