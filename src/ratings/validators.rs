// src/ratings/validators.rs

use super::models::Rating;
use crate::catalog::validators::ProductValidator;
use crate::common::{ValidationResult, Validator};
use crate::users::validators::UserValidator;

pub const GRADE_MIN: i32 = 1;
pub const GRADE_MAX: i32 = 10;

/// Structural validator for ratings.
///
/// Descends depth-first into the owned sub-entities, product first (which in
/// turn validates category and seller), then rating user, then rated user.
pub struct RatingValidator;

impl Validator<Rating> for RatingValidator {
    fn validate(&self, data: &Rating) -> ValidationResult {
        let mut result = ValidationResult::new();

        result.merge_under("product", ProductValidator.validate(&data.product));
        result.merge_under("rating_user", UserValidator.validate(&data.rating_user));
        result.merge_under("rated_user", UserValidator.validate(&data.rated_user));

        if !(GRADE_MIN..=GRADE_MAX).contains(&data.grade) {
            result.add_error("grade", "Grade must be between 1 and 10");
        }

        result
    }
}
