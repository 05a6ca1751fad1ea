// src/common/id_generator.rs
//! Crockford Base32 ID generator
//!
//! Surrogate ids are assigned at construction time, before the entity ever
//! reaches a storage collaborator. Format: PREFIX_XXXXXX (e.g., U_K7NP3X for
//! users). The alphabet excludes I, L, O, U so ids stay easy to read and
//! communicate verbally.

use rand::Rng;

/// Crockford Base32 alphabet (excludes I, L, O, U to avoid confusion)
const CROCKFORD_ALPHABET: &[u8; 32] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ";

/// Entity type prefixes for ID generation
#[derive(Debug, Clone, Copy)]
pub enum EntityPrefix {
    /// User account (U_)
    User,
    /// Category (C_)
    Category,
    /// Auction product (P_)
    Product,
    /// Rating (R_)
    Rating,
    /// Bonus package (B_)
    Bonus,
}

impl EntityPrefix {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityPrefix::User => "U",
            EntityPrefix::Category => "C",
            EntityPrefix::Product => "P",
            EntityPrefix::Rating => "R",
            EntityPrefix::Bonus => "B",
        }
    }
}

fn generate_crockford_string(length: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..length)
        .map(|_| {
            let idx = rng.gen_range(0..32);
            CROCKFORD_ALPHABET[idx] as char
        })
        .collect()
}

/// Generate a prefixed ID, e.g. `generate_id(EntityPrefix::Rating)` →
/// "R_8MWQT2".
pub fn generate_id(prefix: EntityPrefix) -> String {
    format!("{}_{}", prefix.as_str(), generate_crockford_string(6))
}

pub fn generate_user_id() -> String {
    generate_id(EntityPrefix::User)
}

pub fn generate_category_id() -> String {
    generate_id(EntityPrefix::Category)
}

pub fn generate_product_id() -> String {
    generate_id(EntityPrefix::Product)
}

pub fn generate_rating_id() -> String {
    generate_id(EntityPrefix::Rating)
}

pub fn generate_bonus_id() -> String {
    generate_id(EntityPrefix::Bonus)
}
