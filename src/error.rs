//! Custom error types for session-store
//!
//! This module defines the error hierarchy for the store using thiserror
//! for ergonomic error definitions. Only hard failures live here; soft
//! failures (duplicate lists, out-of-range removals) are reported through
//! the diagnostics sink and never surface as errors.

use thiserror::Error;

/// The main error type for session-store operations
#[derive(Error, Debug)]
pub enum SessionError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Invalid names or values rejected before any mutation
    #[error("Validation error: {0}")]
    Validation(String),

    /// Malformed session document
    #[error("Parse error: {0}")]
    Parse(String),

    /// Input outside the cipher's 7-bit alphabet
    #[error("Cipher error: {0}")]
    Cipher(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// A list has no entry at the requested index
    #[error("Index {index} was not assigned in {list}")]
    IndexNotAssigned { list: String, index: usize },

    /// Stored type disagrees with the accessor used
    #[error("Type mismatch for '{name}': expected {expected}, found {found}")]
    TypeMismatch {
        name: String,
        expected: &'static str,
        found: &'static str,
    },

    /// Persisting was requested before any file was opened
    #[error("No session file is open")]
    NoFileOpen,
}

impl SessionError {
    /// Create a "not found" error for lists
    pub fn list_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "List",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for variables
    pub fn variable_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Variable",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a type mismatch
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, Self::TypeMismatch { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for SessionError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SessionError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for session-store operations
pub type SessionResult<T> = Result<T, SessionError>;
