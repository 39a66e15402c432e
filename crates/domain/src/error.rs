//! Unified error types for the domain layer
//!
//! Filter-form mutations report invariant violations through [`DomainError`]
//! so the presentation layer can log and ignore them instead of panicking.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., a key used with the wrong kind of field)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Business rule violation
    #[error("Constraint violation: {0}")]
    Constraint(String),

    /// Parse error (for value objects)
    #[error("Parse error: {0}")]
    Parse(String),

    /// Bounded collection is at capacity
    #[error("Container full: {current}/{max} items")]
    ContainerFull { current: usize, max: usize },
}

impl DomainError {
    /// Creates a validation error for misuse of a form field.
    ///
    /// # Example
    /// ```ignore
    /// if !key.is_text() {
    ///     return Err(DomainError::validation(format!("{key} is not a text field")));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a constraint violation error
    pub fn constraint(msg: impl Into<String>) -> Self {
        Self::Constraint(msg.into())
    }

    /// Creates a parse error for string-to-type conversion failures.
    ///
    /// Used by the `FromStr` implementations of the filter vocabulary
    /// (upgrade kinds, color slots, criteria keys).
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create a container full error
    pub fn container_full(current: usize, max: usize) -> Self {
        Self::ContainerFull { current, max }
    }
}
