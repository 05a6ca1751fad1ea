//! Tests for the catalog module
//!
//! Covers category and product validation, including the recursive descent
//! into category and seller and the auction date window.

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};

    use crate::catalog::models::{Category, Currency, Product};
    use crate::catalog::validators::{CategoryValidator, ProductValidator};
    use crate::common::Validator;
    use crate::users::models::{AccountType, User};

    fn seller() -> User {
        User::new(
            "Ion",
            "Ionescu",
            "ion.ionescu",
            None,
            "ion@example.com",
            "Parola12!",
            AccountType::Seller,
        )
    }

    fn valid_product() -> Product {
        let start = Utc::now() - Duration::days(10);
        let end = Utc::now() - Duration::days(3);
        Product::new(
            "Vintage camera",
            "Fully working 1970s rangefinder",
            Category::new("Electronics", None),
            150.0,
            Currency::Ron,
            seller(),
            start,
            end,
        )
    }

    // ========================================================================
    // Category
    // ========================================================================

    #[test]
    fn test_category_name_boundaries() {
        assert!(CategoryValidator
            .validate(&Category::new(&"c".repeat(100), None))
            .is_valid);
        assert!(!CategoryValidator
            .validate(&Category::new(&"c".repeat(101), None))
            .is_valid);
        assert!(!CategoryValidator.validate(&Category::new("", None)).is_valid);
        assert!(!CategoryValidator
            .validate(&Category::new("   ", None))
            .is_valid);
    }

    #[test]
    fn test_category_parent_is_presence_only() {
        // An out-of-shape parent does not fail the child
        let parent = Category::new("", None);
        let child = Category::new("Books", Some(parent));
        assert!(CategoryValidator.validate(&child).is_valid);
    }

    // ========================================================================
    // Product
    // ========================================================================

    #[test]
    fn test_valid_product_passes() {
        let result = ProductValidator.validate(&valid_product());
        assert!(result.is_valid, "unexpected errors: {}", result);
    }

    #[test]
    fn test_product_name_and_description_boundaries() {
        let mut product = valid_product();
        product.name = "n".repeat(250);
        assert!(ProductValidator.validate(&product).is_valid);
        product.name = "n".repeat(251);
        assert!(!ProductValidator.validate(&product).is_valid);

        let mut product = valid_product();
        product.description = "d".repeat(500);
        assert!(ProductValidator.validate(&product).is_valid);
        product.description = "d".repeat(501);
        assert!(!ProductValidator.validate(&product).is_valid);

        let mut product = valid_product();
        product.name = String::new();
        product.description = String::new();
        let result = ProductValidator.validate(&product);
        assert!(result.errors.iter().any(|e| e.field == "name"));
        assert!(result.errors.iter().any(|e| e.field == "description"));
    }

    #[test]
    fn test_negative_starting_price_is_rejected() {
        let mut product = valid_product();
        product.starting_price = -0.01;
        let result = ProductValidator.validate(&product);
        assert!(!result.is_valid);
        assert!(result.errors.iter().any(|e| e.field == "starting_price"));

        product.starting_price = 0.0; // free listing is allowed
        assert!(ProductValidator.validate(&product).is_valid);
    }

    #[test]
    fn test_nan_starting_price_is_rejected() {
        let mut product = valid_product();
        product.starting_price = f64::NAN;
        let result = ProductValidator.validate(&product);
        assert!(!result.is_valid);
        assert!(result.errors.iter().any(|e| e.field == "starting_price"));
    }

    #[test]
    fn test_end_date_must_be_strictly_after_start() {
        let mut product = valid_product();
        product.end_date = product.start_date;
        let result = ProductValidator.validate(&product);
        assert!(!result.is_valid);
        assert!(result.errors.iter().any(|e| e.field == "end_date"));

        let mut product = valid_product();
        product.end_date = product.start_date - Duration::hours(1);
        assert!(!ProductValidator.validate(&product).is_valid);
    }

    #[test]
    fn test_invalid_category_fails_the_product() {
        let mut product = valid_product();
        product.category.name = String::new();
        let result = ProductValidator.validate(&product);
        assert!(!result.is_valid);
        assert!(result.errors.iter().any(|e| e.field == "category.name"));
    }

    #[test]
    fn test_invalid_seller_fails_the_product() {
        let mut product = valid_product();
        product.seller.email = "no-at-sign".to_string();
        let result = ProductValidator.validate(&product);
        assert!(!result.is_valid);
        assert!(result.errors.iter().any(|e| e.field == "seller.email"));
    }
}
