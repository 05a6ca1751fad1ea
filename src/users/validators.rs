// src/users/validators.rs

use super::models::User;
use crate::common::validation::{
    is_valid_email, is_valid_password, is_valid_person_name, is_valid_phone, is_valid_username,
};
use crate::common::{ValidationResult, Validator};

pub const NAME_MAX_LEN: usize = 16;
pub const USERNAME_MAX_LEN: usize = 30;
pub const PHONE_MAX_LEN: usize = 15;
pub const EMAIL_MAX_LEN: usize = 60;

// ============================================================================
// User Validator
// ============================================================================

pub struct UserValidator;

impl Validator<User> for UserValidator {
    fn validate(&self, data: &User) -> ValidationResult {
        let mut result = ValidationResult::new();

        if !is_valid_person_name(&data.first_name, NAME_MAX_LEN) {
            result.add_error(
                "first_name",
                "First name must be 1-16 letters, capitalized, with a lowercase letter after the first",
            );
        }

        if !is_valid_person_name(&data.last_name, NAME_MAX_LEN) {
            result.add_error(
                "last_name",
                "Last name must be 1-16 letters, capitalized, with a lowercase letter after the first",
            );
        }

        if !is_valid_username(&data.username, USERNAME_MAX_LEN) {
            result.add_error("username", "Username must be 1-30 characters");
        }

        // Phone number is optional; absent is valid, present must be digits
        if let Some(phone) = &data.phone_number {
            if !is_valid_phone(phone, PHONE_MAX_LEN) {
                result.add_error("phone_number", "Phone number must be 1-15 digits");
            }
        }

        if !is_valid_email(&data.email, EMAIL_MAX_LEN) {
            result.add_error(
                "email",
                "Email must be at most 60 characters in local@domain shape",
            );
        }

        if !is_valid_password(&data.password) {
            result.add_error(
                "password",
                "Password must be 8-20 characters with an uppercase letter, a lowercase letter, a digit and a symbol",
            );
        }

        result
    }
}
