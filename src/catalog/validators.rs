// src/catalog/validators.rs

use super::models::{Category, Product};
use crate::common::{ValidationResult, Validator};
use crate::users::validators::UserValidator;

pub const CATEGORY_NAME_MAX_LEN: usize = 100;
pub const PRODUCT_NAME_MAX_LEN: usize = 250;
pub const PRODUCT_DESCRIPTION_MAX_LEN: usize = 500;

// ============================================================================
// Category Validator
// ============================================================================

pub struct CategoryValidator;

impl Validator<Category> for CategoryValidator {
    fn validate(&self, data: &Category) -> ValidationResult {
        let mut result = ValidationResult::new();

        if data.name.trim().is_empty() {
            result.add_error("name", "Category name is required");
        } else if data.name.chars().count() > CATEGORY_NAME_MAX_LEN {
            result.add_error("name", "Category name must not exceed 100 characters");
        }

        // Parent categories are presence-only; their own validity is checked
        // when they are persisted, not on every child.

        result
    }
}

// ============================================================================
// Product Validator
// ============================================================================

/// Validates a product together with its owned sub-entities, depth-first:
/// category before seller.
pub struct ProductValidator;

impl Validator<Product> for ProductValidator {
    fn validate(&self, data: &Product) -> ValidationResult {
        let mut result = ValidationResult::new();

        if data.name.trim().is_empty() {
            result.add_error("name", "Product name is required");
        } else if data.name.chars().count() > PRODUCT_NAME_MAX_LEN {
            result.add_error("name", "Product name must not exceed 250 characters");
        }

        if data.description.trim().is_empty() {
            result.add_error("description", "Product description is required");
        } else if data.description.chars().count() > PRODUCT_DESCRIPTION_MAX_LEN {
            result.add_error(
                "description",
                "Product description must not exceed 500 characters",
            );
        }

        result.merge_under("category", CategoryValidator.validate(&data.category));

        // Negated comparison so NaN fails too
        if !(data.starting_price >= 0.0) {
            result.add_error("starting_price", "Starting price must be a non-negative number");
        }

        result.merge_under("seller", UserValidator.validate(&data.seller));

        if data.end_date <= data.start_date {
            result.add_error("end_date", "End date must be after the start date");
        }

        result
    }
}
