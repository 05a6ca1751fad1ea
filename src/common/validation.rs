// Common validation types, traits and field-level validators

use std::fmt;

#[derive(Debug)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

#[derive(Debug)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
        }
    }

    pub fn add_error(&mut self, field: &str, message: &str) {
        self.is_valid = false;
        self.errors.push(ValidationError {
            field: field.to_string(),
            message: message.to_string(),
        });
    }

    pub fn merge(&mut self, other: ValidationResult) {
        if !other.is_valid {
            self.is_valid = false;
            self.errors.extend(other.errors);
        }
    }

    /// Merges a nested entity's result, prefixing its field names so the
    /// offending field stays identifiable ("product.seller.email").
    pub fn merge_under(&mut self, prefix: &str, other: ValidationResult) {
        if !other.is_valid {
            self.is_valid = false;
            for error in other.errors {
                self.errors.push(ValidationError {
                    field: format!("{}.{}", prefix, error.field),
                    message: error.message,
                });
            }
        }
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for error in &self.errors {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", error.field, error.message)?;
            first = false;
        }
        Ok(())
    }
}

pub trait Validator<T> {
    fn validate(&self, data: &T) -> ValidationResult;
}

// ============================================================================
// Field Validators
// ============================================================================

/// Symbols accepted by the password complexity check.
pub const PASSWORD_SYMBOLS: &str = "!@#$%^&*()-_+=[]{}|;:,.<>?/~";

pub const PASSWORD_MIN_LEN: usize = 8;
pub const PASSWORD_MAX_LEN: usize = 20;

/// Person-name shape: non-empty, at most `max_len` characters, first character
/// uppercase, letters only, and at least one lowercase letter after the first.
pub fn is_valid_person_name(value: &str, max_len: usize) -> bool {
    if value.is_empty() || value.chars().count() > max_len {
        return false;
    }
    let mut chars = value.chars();
    match chars.next() {
        Some(first) if first.is_uppercase() => {}
        _ => return false,
    }
    if !value.chars().all(|c| c.is_alphabetic()) {
        return false;
    }
    value.chars().skip(1).any(|c| c.is_lowercase())
}

/// Free-form identifier: non-empty and at most `max_len` characters.
pub fn is_valid_username(value: &str, max_len: usize) -> bool {
    !value.is_empty() && value.chars().count() <= max_len
}

/// Phone numbers are digits only, non-empty, at most `max_len` characters.
/// The field itself is optional; absence is handled at the call site.
pub fn is_valid_phone(value: &str, max_len: usize) -> bool {
    !value.is_empty()
        && value.chars().count() <= max_len
        && value.chars().all(|c| c.is_ascii_digit())
}

/// Minimal "local@domain" shape check, not full RFC compliance: exactly one
/// '@' with non-empty segments on both sides, bounded total length.
pub fn is_valid_email(value: &str, max_len: usize) -> bool {
    if value.is_empty() || value.chars().count() > max_len {
        return false;
    }
    let mut parts = value.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => !local.is_empty() && !domain.is_empty(),
        _ => false,
    }
}

/// Password complexity: length within [8, 20] with at least one uppercase
/// letter, one lowercase letter, one digit and one symbol.
pub fn is_valid_password(value: &str) -> bool {
    let len = value.chars().count();
    if len < PASSWORD_MIN_LEN || len > PASSWORD_MAX_LEN {
        return false;
    }
    let has_upper = value.chars().any(|c| c.is_uppercase());
    let has_lower = value.chars().any(|c| c.is_lowercase());
    let has_digit = value.chars().any(|c| c.is_ascii_digit());
    let has_symbol = value.chars().any(|c| PASSWORD_SYMBOLS.contains(c));
    has_upper && has_lower && has_digit && has_symbol
}
