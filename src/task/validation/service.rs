//! Validation service implementation.
//!
//! Provides the default implementation of the `TaskValidator` port,
//! combining the per-field rules into a complete payload check.

use crate::task::{
    domain::CreateTaskRequest,
    error::{ValidationError, ValidationErrors},
    ports::validator::{TaskValidator, ValidationConfig, ValidationResult},
    validation::rules,
};
use serde_json::{Map, Value};

/// Default implementation of the task validator.
///
/// Evaluates every field rule, collecting errors to provide comprehensive
/// feedback rather than failing on the first error.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use taskboard::task::domain::TaskPriority;
/// use taskboard::task::ports::validator::TaskValidator;
/// use taskboard::task::validation::service::DefaultTaskValidator;
///
/// let payload = json!({"title": "Ship release", "priority": "high"});
/// let validator = DefaultTaskValidator::new();
/// let request = validator
///     .validate(payload.as_object().expect("object payload"))
///     .expect("valid payload");
/// assert_eq!(request.priority(), Some(TaskPriority::High));
/// ```
#[derive(Debug, Clone, Default)]
pub struct DefaultTaskValidator {
    config: ValidationConfig,
}

impl DefaultTaskValidator {
    /// Creates a new validator with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new validator with custom configuration.
    #[must_use]
    pub const fn with_config(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Returns the current validation configuration.
    #[must_use]
    pub const fn config(&self) -> &ValidationConfig {
        &self.config
    }
}

impl TaskValidator for DefaultTaskValidator {
    fn validate(&self, input: &Map<String, Value>) -> ValidationResult<CreateTaskRequest> {
        let mut errors = Vec::new();

        let checked_title = collect(&mut errors, rules::validate_title(input, &self.config));
        let checked_description =
            collect(&mut errors, rules::validate_description(input, &self.config));
        let checked_status = collect(&mut errors, rules::validate_status(input));
        let checked_priority = collect(&mut errors, rules::validate_priority(input));
        let checked_due_date = collect(&mut errors, rules::validate_due_date(input));

        let (Some(mut request), Some(description), Some(status), Some(priority), Some(due_date)) = (
            checked_title,
            checked_description,
            checked_status,
            checked_priority,
            checked_due_date,
        ) else {
            return Err(ValidationErrors::new(errors));
        };

        if let Some(text) = description {
            request = request.with_description(text);
        }
        if let Some(value) = status {
            request = request.with_status(value);
        }
        if let Some(value) = priority {
            request = request.with_priority(value);
        }
        if let Some(value) = due_date {
            request = request.with_due_date(value);
        }
        Ok(request)
    }
}

/// Records a rule failure and returns the accepted value, if any.
fn collect<T>(errors: &mut Vec<ValidationError>, result: Result<T, ValidationError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(error) => {
            errors.push(error);
            None
        }
    }
}

// Note: Unit tests for DefaultTaskValidator are located in
// src/task/tests/validation_tests.rs.
