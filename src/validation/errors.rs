//! Validation errors
//!
//! Each variant's display text is the constraint reported back to the
//! client, so keep the wording stable.

use thiserror::Error;

/// Result type for payload validation
pub type ValidationResult<T> = Result<T, ValidationError>;

/// First violated constraint of a create/update payload
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Body is not a JSON object
    #[error("Payload must be a JSON object")]
    NotAnObject,

    /// Required field missing, null or empty
    #[error("`{0}` required")]
    Required(&'static str),

    /// Text field holds a non-string value
    #[error("`{0}` must be a string")]
    NotAString(&'static str),

    /// Flag field holds a non-boolean value
    #[error("`{0}` must be a boolean")]
    NotABoolean(&'static str),

    /// Text shorter than the field's minimum. Carries the field's own message.
    #[error("{message}")]
    TooShort {
        field: &'static str,
        message: &'static str,
    },

    /// Update payload with no recognized field
    #[error("Provide properties to update")]
    EmptyUpdate,
}
