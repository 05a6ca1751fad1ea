// src/bonuses/validators.rs

use chrono::Utc;

use super::models::BonusPackage;
use crate::common::{ValidationResult, Validator};

pub const BONUS_NAME_MIN_LEN: usize = 3;
pub const BONUS_NAME_MAX_LEN: usize = 270;

// ============================================================================
// Bonus Package Validator
// ============================================================================

/// Shape checks for bonus packages. Dates are judged against the clock at
/// validation time: the package must start strictly in the future and end
/// strictly after it starts.
pub struct BonusValidator;

impl Validator<BonusPackage> for BonusValidator {
    fn validate(&self, data: &BonusPackage) -> ValidationResult {
        let mut result = ValidationResult::new();
        let now = Utc::now();

        let name_len = data.name.chars().count();
        if data.name.trim().is_empty() {
            result.add_error("name", "Bonus package name is required");
        } else if name_len < BONUS_NAME_MIN_LEN {
            result.add_error("name", "Bonus package name must be at least 3 characters");
        } else if name_len > BONUS_NAME_MAX_LEN {
            result.add_error("name", "Bonus package name must not exceed 270 characters");
        }

        if data.start_date <= now {
            result.add_error("start_date", "Start date must be in the future");
        }

        if data.end_date <= data.start_date {
            result.add_error("end_date", "End date must be after the start date");
        } else if data.end_date <= now {
            result.add_error("end_date", "End date must be in the future");
        }

        let allowances = [
            ("national_minutes", data.national_minutes),
            ("international_minutes", data.international_minutes),
            ("roaming_minutes", data.roaming_minutes),
            ("national_sms", data.national_sms),
            ("international_sms", data.international_sms),
            ("roaming_sms", data.roaming_sms),
            ("national_traffic_mb", data.national_traffic_mb),
            ("international_traffic_mb", data.international_traffic_mb),
            ("roaming_traffic_mb", data.roaming_traffic_mb),
        ];
        for (field, value) in allowances {
            if value < 0 {
                result.add_error(field, "Allowance cannot be negative");
            }
        }

        result
    }
}
