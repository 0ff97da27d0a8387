//! Validation module.

mod validate;

pub use validate::{validate_config, validate_order, ValidationResult, NOTHING_TO_QUOTE};
