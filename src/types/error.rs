//! Unified Error Type System
//!
//! Centralized error types for the entire application.
//!
//! ## Design Principles
//!
//! - Single unified error type (`DocError`) for the entire application
//! - Structured error variants with context for better diagnostics
//! - No panic/unwrap in library code - all failures surface as values

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocError {
    // -------------------------------------------------------------------------
    // System Errors (auto From impl)
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // -------------------------------------------------------------------------
    // Domain Errors
    // -------------------------------------------------------------------------
    /// The syntax-tree front-end could not process one source unit.
    #[error("Parse error in {path}: {message}")]
    Parse { message: String, path: String },

    /// A default-value expression was not a compile-time literal.
    /// Fatal to the owning function's extraction, not to the whole run.
    #[error("non-literal default value `{expression}` in function `{function}`")]
    NonLiteralDefault {
        function: String,
        expression: String,
    },

    #[error("Config error: {0}")]
    Config(String),
}

impl DocError {
    /// Create a parse error for a source unit
    pub fn parse(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DocError>;
