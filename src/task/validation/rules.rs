//! Individual validation rule implementations.
//!
//! Each rule is a pure function that inspects one field of the untyped
//! payload. Rules return the typed value on success (`None` for an omitted
//! optional field) or the [`ValidationError`] describing the violation.
//! A JSON `null` counts as omitted.

use crate::task::{
    domain::{CreateTaskRequest, DueDate, TaskField, TaskPriority, TaskStatus},
    error::ValidationError,
    ports::validator::ValidationConfig,
};
use serde_json::{Map, Value};

/// Validates the required `title` field.
///
/// On success the title seeds a [`CreateTaskRequest`] that the remaining
/// fields are added to. The title is kept verbatim.
///
/// # Errors
///
/// Returns a `required` error when the title is missing, null, empty, or
/// whitespace-only, a `wrong-type` error when it is not a string, and a
/// `too-long` error when it exceeds the configured limit.
///
/// # Examples
///
/// ```rust
/// use serde_json::json;
/// use taskboard::task::ports::validator::ValidationConfig;
/// use taskboard::task::validation::rules::validate_title;
///
/// let input = json!({"title": "Buy milk"});
/// let fields = input.as_object().expect("object payload");
/// let seed = validate_title(fields, &ValidationConfig::default()).expect("valid title");
/// assert_eq!(seed.title(), "Buy milk");
/// ```
pub fn validate_title(
    input: &Map<String, Value>,
    config: &ValidationConfig,
) -> Result<CreateTaskRequest, ValidationError> {
    let field = TaskField::Title;
    let Some(value) = present(input, field) else {
        return Err(ValidationError::required(field));
    };
    let Value::String(title) = value else {
        return Err(ValidationError::expected_string(field));
    };
    let seed =
        CreateTaskRequest::new(title.as_str()).map_err(|_| ValidationError::required(field))?;
    check_length(field, title, config.max_title_chars)?;
    Ok(seed)
}

/// Validates the optional `description` field.
///
/// # Errors
///
/// Returns a `wrong-type` error when the description is not a string and a
/// `too-long` error when it exceeds the configured limit.
pub fn validate_description(
    input: &Map<String, Value>,
    config: &ValidationConfig,
) -> Result<Option<String>, ValidationError> {
    let field = TaskField::Description;
    let Some(value) = present(input, field) else {
        return Ok(None);
    };
    let Value::String(description) = value else {
        return Err(ValidationError::expected_string(field));
    };
    check_length(field, description, config.max_description_chars)?;
    Ok(Some(description.clone()))
}

/// Validates the optional `status` field against [`TaskStatus`].
///
/// # Errors
///
/// Returns a `not-in-enumeration` error when the value is not exactly one of
/// `pending`, `in-progress`, or `completed`.
pub fn validate_status(input: &Map<String, Value>) -> Result<Option<TaskStatus>, ValidationError> {
    let field = TaskField::Status;
    present(input, field)
        .map(|value| {
            value
                .as_str()
                .and_then(|token| TaskStatus::try_from(token).ok())
                .ok_or_else(|| {
                    ValidationError::not_in_enumeration(
                        field,
                        "Status",
                        &TaskStatus::ALL.map(TaskStatus::as_str),
                    )
                })
        })
        .transpose()
}

/// Validates the optional `priority` field against [`TaskPriority`].
///
/// # Errors
///
/// Returns a `not-in-enumeration` error when the value is not exactly one of
/// `low`, `medium`, or `high`.
pub fn validate_priority(
    input: &Map<String, Value>,
) -> Result<Option<TaskPriority>, ValidationError> {
    let field = TaskField::Priority;
    present(input, field)
        .map(|value| {
            value
                .as_str()
                .and_then(|token| TaskPriority::try_from(token).ok())
                .ok_or_else(|| {
                    ValidationError::not_in_enumeration(
                        field,
                        "Priority",
                        &TaskPriority::ALL.map(TaskPriority::as_str),
                    )
                })
        })
        .transpose()
}

/// Validates the optional `dueDate` field.
///
/// # Errors
///
/// Returns an `invalid-format` error when the value is not a string or does
/// not parse as an ISO 8601 date or date-time.
pub fn validate_due_date(input: &Map<String, Value>) -> Result<Option<DueDate>, ValidationError> {
    let field = TaskField::DueDate;
    present(input, field)
        .map(|value| {
            value
                .as_str()
                .and_then(|text| DueDate::parse(text).ok())
                .ok_or_else(|| ValidationError::invalid_date(field))
        })
        .transpose()
}

/// Returns the field's value unless it is absent or null.
fn present(input: &Map<String, Value>, field: TaskField) -> Option<&Value> {
    input.get(field.as_str()).filter(|value| !value.is_null())
}

fn check_length(
    field: TaskField,
    text: &str,
    limit: Option<usize>,
) -> Result<(), ValidationError> {
    match limit {
        Some(max) if text.chars().count() > max => Err(ValidationError::too_long(field, max)),
        _ => Ok(()),
    }
}
