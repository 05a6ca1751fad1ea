//! Promotional bonus package data model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::generate_bonus_id;

/// Operator-defined promotional package with nine independent allowances:
/// minutes, SMS and data traffic, each for national, international and
/// roaming use.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BonusPackage {
    pub id: String,
    pub name: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub active: bool,
    pub national_minutes: i64,
    pub international_minutes: i64,
    pub roaming_minutes: i64,
    pub national_sms: i64,
    pub international_sms: i64,
    pub roaming_sms: i64,
    pub national_traffic_mb: i64,
    pub international_traffic_mb: i64,
    pub roaming_traffic_mb: i64,
}

impl BonusPackage {
    /// New inactive package with zeroed allowances; callers fill in the
    /// allowances they actually grant.
    pub fn new(name: &str, start_date: DateTime<Utc>, end_date: DateTime<Utc>) -> Self {
        Self {
            id: generate_bonus_id(),
            name: name.to_string(),
            start_date,
            end_date,
            active: false,
            national_minutes: 0,
            international_minutes: 0,
            roaming_minutes: 0,
            national_sms: 0,
            international_sms: 0,
            roaming_sms: 0,
            national_traffic_mb: 0,
            international_traffic_mb: 0,
            roaming_traffic_mb: 0,
        }
    }
}
