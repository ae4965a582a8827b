//! Validator port for task-creation payloads.
//!
//! Defines the abstract interface for turning an untyped payload into a
//! [`CreateTaskRequest`].

use crate::task::{domain::CreateTaskRequest, error::ValidationErrors};
use serde_json::{Map, Value};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationErrors>;

/// Port for task-creation validation.
///
/// # Implementation Notes
///
/// Implementations should:
/// - Check every field and collect all errors before returning (not
///   fail-fast)
/// - Never correct or default a rejected value
/// - Be stateless and thread-safe
pub trait TaskValidator: Send + Sync {
    /// Validates a decoded JSON object and builds a creation request.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationErrors`] listing every field that failed.
    fn validate(&self, input: &Map<String, Value>) -> ValidationResult<CreateTaskRequest>;
}

/// Configuration for validation rules.
///
/// The default configuration imposes no length limits, so only the schema's
/// own constraints apply.
///
/// # Examples
///
/// ```
/// use taskboard::task::ports::validator::ValidationConfig;
///
/// let config = ValidationConfig::default();
/// assert_eq!(config.max_title_chars, None);
///
/// let strict = ValidationConfig::strict();
/// assert_eq!(strict.max_title_chars, Some(200));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationConfig {
    /// Maximum title length in characters.
    pub max_title_chars: Option<usize>,
    /// Maximum description length in characters.
    pub max_description_chars: Option<usize>,
}

impl ValidationConfig {
    /// Creates a strict configuration with bounded text fields.
    ///
    /// Useful for public-facing endpoints.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            max_title_chars: Some(200),
            max_description_chars: Some(2_000),
        }
    }

    /// Sets the maximum title length.
    #[must_use]
    pub const fn with_max_title_chars(mut self, limit: usize) -> Self {
        self.max_title_chars = Some(limit);
        self
    }

    /// Sets the maximum description length.
    #[must_use]
    pub const fn with_max_description_chars(mut self, limit: usize) -> Self {
        self.max_description_chars = Some(limit);
        self
    }
}
