//! Validation error types for task-creation payloads.
//!
//! Uses `thiserror` for ergonomic error handling with typed values that can
//! be inspected by callers. A rejected payload yields [`ValidationErrors`],
//! which carries one [`ValidationError`] per violated field.

use super::domain::TaskField;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Why a field value was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValidationReason {
    /// The field is missing, null, or blank.
    Required,
    /// The field holds a JSON value of the wrong type.
    WrongType,
    /// The field is not one of the allowed enumeration tokens.
    NotInEnumeration,
    /// The field is text but not in the expected format.
    InvalidFormat,
    /// The field exceeds a configured length limit.
    TooLong,
}

impl ValidationReason {
    /// Returns the reason code used in error responses.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::WrongType => "wrong-type",
            Self::NotInEnumeration => "not-in-enumeration",
            Self::InvalidFormat => "invalid-format",
            Self::TooLong => "too-long",
        }
    }
}

impl fmt::Display for ValidationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{field}: {message}")]
pub struct ValidationError {
    field: TaskField,
    reason: ValidationReason,
    message: String,
}

impl ValidationError {
    /// Creates a validation error.
    #[must_use]
    pub fn new(field: TaskField, reason: ValidationReason, message: impl Into<String>) -> Self {
        Self {
            field,
            reason,
            message: message.into(),
        }
    }

    /// Creates a `required` error with the standard message.
    #[must_use]
    pub fn required(field: TaskField) -> Self {
        Self::new(
            field,
            ValidationReason::Required,
            format!("{field} should not be empty"),
        )
    }

    /// Creates a `wrong-type` error for a field that must be a string.
    #[must_use]
    pub fn expected_string(field: TaskField) -> Self {
        Self::new(
            field,
            ValidationReason::WrongType,
            format!("{field} must be a string"),
        )
    }

    /// Creates a `not-in-enumeration` error listing the allowed tokens.
    #[must_use]
    pub fn not_in_enumeration(field: TaskField, label: &str, allowed: &[&str]) -> Self {
        Self::new(
            field,
            ValidationReason::NotInEnumeration,
            format!("{label} must be one of: {}", allowed.join(", ")),
        )
    }

    /// Creates an `invalid-format` error for a malformed date string.
    #[must_use]
    pub fn invalid_date(field: TaskField) -> Self {
        Self::new(
            field,
            ValidationReason::InvalidFormat,
            format!("{field} must be a valid ISO 8601 date string"),
        )
    }

    /// Creates a `too-long` error for text above a character limit.
    #[must_use]
    pub fn too_long(field: TaskField, limit: usize) -> Self {
        Self::new(
            field,
            ValidationReason::TooLong,
            format!("{field} must be at most {limit} characters"),
        )
    }

    /// Returns the rejected field.
    #[must_use]
    pub const fn field(&self) -> TaskField {
        self.field
    }

    /// Returns the rejection reason.
    #[must_use]
    pub const fn reason(&self) -> ValidationReason {
        self.reason
    }

    /// Returns the human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Every violation found while validating one payload.
///
/// Never empty: a payload either validates or produces at least one error.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(transparent)]
#[error("task validation failed: {}", format_errors(.0))]
pub struct ValidationErrors(Vec<ValidationError>);

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationErrors {
    /// Collects validation errors.
    ///
    /// Only the validator builds collections, and only after at least one
    /// rule failed; outside the crate use `From<ValidationError>`.
    #[must_use]
    pub(crate) fn new(errors: Vec<ValidationError>) -> Self {
        debug_assert!(!errors.is_empty(), "ValidationErrors built from no errors");
        Self(errors)
    }

    /// Returns the individual errors in field order.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.0
    }

    /// Returns the rejected fields in report order.
    #[must_use]
    pub fn fields(&self) -> Vec<TaskField> {
        self.0.iter().map(ValidationError::field).collect()
    }

    /// Returns `true` when the given field was rejected.
    #[must_use]
    pub fn contains(&self, field: TaskField) -> bool {
        self.0.iter().any(|error| error.field() == field)
    }

    /// Returns the first error reported for `field`, if any.
    #[must_use]
    pub fn for_field(&self, field: TaskField) -> Option<&ValidationError> {
        self.0.iter().find(|error| error.field() == field)
    }

    /// Returns the number of errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when no errors are held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consumes the collection and returns the errors.
    #[must_use]
    pub fn into_inner(self) -> Vec<ValidationError> {
        self.0
    }
}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        Self(vec![error])
    }
}
