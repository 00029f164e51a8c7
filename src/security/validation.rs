//! Request Validation Module
//!
//! Input checks applied by the API before anything reaches the chat or game logic.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::chat::MAX_MESSAGE_CHARS;

/// Validation error types
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationError {
    #[error("Field '{field}' must not be empty")]
    Blank { field: String },

    #[error("Field '{field}' is too long (max: {max}, got: {got})")]
    TooLong {
        field: String,
        max: usize,
        got: usize,
    },

    #[error("Invalid {field}: {got} (must be below {len})")]
    OutOfRange { field: String, len: usize, got: usize },
}

impl ValidationError {
    pub fn field(&self) -> &str {
        match self {
            Self::Blank { field } => field.as_str(),
            Self::TooLong { field, .. } => field.as_str(),
            Self::OutOfRange { field, .. } => field.as_str(),
        }
    }
}

/// Validation result type
pub type ValidationResult<T> = std::result::Result<T, ValidationError>;

/// Request validator implementation
#[derive(Debug, Clone)]
pub struct RequestValidator {
    /// Maximum characters in a chat message
    max_message_chars: usize,
}

impl Default for RequestValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestValidator {
    /// Create new validator
    pub fn new() -> Self {
        Self {
            max_message_chars: MAX_MESSAGE_CHARS,
        }
    }

    /// Set maximum message length
    pub fn with_max_message_chars(mut self, max: usize) -> Self {
        self.max_message_chars = max;
        self
    }

    pub fn max_message_chars(&self) -> usize {
        self.max_message_chars
    }

    /// Reject empty and whitespace-only values
    pub fn validate_not_blank(&self, field: &str, value: &str) -> ValidationResult<()> {
        if value.trim().is_empty() {
            return Err(ValidationError::Blank {
                field: field.to_string(),
            });
        }
        Ok(())
    }

    /// Validate field length in characters
    pub fn validate_length(&self, field: &str, value: &str, max: usize) -> ValidationResult<()> {
        let length = value.chars().count();
        if length > max {
            return Err(ValidationError::TooLong {
                field: field.to_string(),
                max,
                got: length,
            });
        }
        Ok(())
    }

    /// Validate a table index
    pub fn validate_index(&self, field: &str, index: usize, len: usize) -> ValidationResult<()> {
        if index >= len {
            return Err(ValidationError::OutOfRange {
                field: field.to_string(),
                len,
                got: index,
            });
        }
        Ok(())
    }

    /// Validate a chat message
    pub fn validate_message(&self, message: &str) -> ValidationResult<()> {
        self.validate_not_blank("message", message)?;
        self.validate_length("message", message, self.max_message_chars)
    }

    /// Sanitize string input
    pub fn sanitize_string(input: &str) -> String {
        // Remove null bytes and control characters
        input
            .trim()
            .chars()
            .filter(|c| !c.is_control() || c.is_whitespace())
            .collect()
    }
}
