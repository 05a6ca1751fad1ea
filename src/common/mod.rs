// Common module - shared types and utilities across all modules

pub mod audit;
pub mod error;
pub mod id_generator;
pub mod validation;

// Re-export commonly used types for convenience
pub use audit::{AuditSink, RecordingAuditSink, TracingAuditSink};
pub use error::Rejection;
pub use id_generator::*;
pub use validation::{ValidationError, ValidationResult, Validator};
