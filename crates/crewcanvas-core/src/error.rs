//! Error types for crewcanvas-core
//!
//! This module provides error types for store operations: validation
//! failures carrying field-level messages and explicit not-found results.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// A single field-level validation message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Field the message applies to (e.g. `"description"`)
    pub field: String,
    /// Human-readable message
    pub message: String,
}

impl FieldError {
    /// Create a new field error
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Core store error type
#[derive(Debug, Error)]
pub enum Error {
    /// One or more fields failed validation; the store was not mutated
    #[error("validation failed: {}", format_fields(.0))]
    Validation(Vec<FieldError>),

    /// Team not found
    #[error("team not found: {0}")]
    TeamNotFound(Uuid),

    /// Agent not found within the target team
    #[error("agent not found: {0}")]
    AgentNotFound(Uuid),

    /// Task not found within the target team
    #[error("task not found: {0}")]
    TaskNotFound(Uuid),
}

impl Error {
    /// Create a validation error for a single field
    #[must_use]
    pub fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation(vec![FieldError::new(field, message)])
    }

    /// Check if this is a validation failure (caller should re-prompt)
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Get error code for UI collaborators
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation_failed",
            Self::TeamNotFound(_) => "team_not_found",
            Self::AgentNotFound(_) => "agent_not_found",
            Self::TaskNotFound(_) => "task_not_found",
        }
    }

    /// Field-level messages for validation failures, empty otherwise
    #[must_use]
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            Self::Validation(errors) => errors,
            _ => &[],
        }
    }
}

fn format_fields(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type alias for store operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = Error::TeamNotFound(Uuid::nil());
        assert_eq!(err.code(), "team_not_found");

        let err = Error::field("name", "must not be blank");
        assert_eq!(err.code(), "validation_failed");
    }

    #[test]
    fn test_is_validation() {
        assert!(Error::field("goal", "must not be blank").is_validation());
        assert!(!Error::AgentNotFound(Uuid::nil()).is_validation());
    }

    #[test]
    fn test_validation_display_lists_fields() {
        let err = Error::Validation(vec![
            FieldError::new("name", "must not be blank"),
            FieldError::new("description", "must be at least 10 characters"),
        ]);
        let msg = err.to_string();
        assert!(msg.contains("name: must not be blank"));
        assert!(msg.contains("description: must be at least 10 characters"));
    }

    #[test]
    fn test_field_errors_accessor() {
        let err = Error::field("role", "must not be blank");
        assert_eq!(err.field_errors().len(), 1);
        assert!(Error::TaskNotFound(Uuid::nil()).field_errors().is_empty());
    }
}
