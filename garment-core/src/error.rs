//! Error types for order quoting.

use std::path::PathBuf;
use thiserror::Error;

/// Error codes for quote processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Configuration file not found (-1)
    ConfigNotFound = -1,
    /// Configuration file could not be parsed (-2)
    ConfigParse = -2,
    /// General input error (-3)
    InvalidInput = -3,
    /// Order has no garments (E100)
    EmptyOrder = 100,
    /// Rate or consumption value is negative or not finite (E101)
    InvalidRate = 101,
    /// Garment model not in the catalog (E200)
    UnknownModel = 200,
    /// No garment model selected (E201)
    NoModelSelected = 201,
    /// Order failed validation (E202)
    InvalidOrder = 202,
    /// History store could not be read or written (E300)
    History = 300,
}

/// Main error type for the quoting library.
#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("Failed to parse configuration {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    #[error("Order has no garments: enter at least one size quantity")]
    EmptyOrder,

    #[error("Invalid value for '{field}': expected a finite non-negative number, got {value}")]
    InvalidRate { field: String, value: f64 },

    #[error("Unknown size label '{label}' (expected one of XS, S, M, L, XL)")]
    InvalidSize { label: String },

    #[error("Invalid value for '{field}': expected {expected}, got '{value}'")]
    InvalidValue {
        field: String,
        expected: String,
        value: String,
    },

    #[error("Garment model not found in catalog: {name}")]
    UnknownModel { name: String },

    #[error("No garment model selected")]
    NoModelSelected,

    #[error("Order cannot be quoted: {}", .errors.join("; "))]
    InvalidOrder { errors: Vec<String> },

    #[error("History store error in {path}: {message}")]
    History { path: PathBuf, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl QuoteError {
    /// Get the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            QuoteError::ConfigNotFound { .. } => ErrorCode::ConfigNotFound,
            QuoteError::ConfigParse { .. } => ErrorCode::ConfigParse,
            QuoteError::EmptyOrder => ErrorCode::EmptyOrder,
            QuoteError::InvalidRate { .. } => ErrorCode::InvalidRate,
            QuoteError::InvalidSize { .. } => ErrorCode::InvalidInput,
            QuoteError::InvalidValue { .. } => ErrorCode::InvalidInput,
            QuoteError::UnknownModel { .. } => ErrorCode::UnknownModel,
            QuoteError::NoModelSelected => ErrorCode::NoModelSelected,
            QuoteError::InvalidOrder { .. } => ErrorCode::InvalidOrder,
            QuoteError::History { .. } => ErrorCode::History,
            QuoteError::Io(_) => ErrorCode::History,
            QuoteError::Json(_) => ErrorCode::History,
        }
    }

    /// Get the numeric error code value.
    pub fn code_value(&self) -> i32 {
        self.code() as i32
    }
}

/// Result type alias for quoting operations.
pub type Result<T> = std::result::Result<T, QuoteError>;
