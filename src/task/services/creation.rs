//! Service layer turning untyped payloads into persisted tasks.

use crate::task::{
    domain::{CreateTaskRequest, Task, TaskId},
    error::ValidationErrors,
    ports::{TaskRepository, TaskRepositoryError, TaskValidator},
};
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for task creation.
#[derive(Debug, Error)]
pub enum TaskCreationError {
    /// The payload is not a JSON object.
    #[error("task payload must be a JSON object, got {0}")]
    MalformedPayload(&'static str),
    /// One or more fields failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for task creation service operations.
pub type TaskCreationResult<T> = Result<T, TaskCreationError>;

/// Task creation orchestration service.
///
/// Validates inbound payloads, applies storage defaults, and hands accepted
/// tasks to the repository.
#[derive(Clone)]
pub struct TaskCreationService<R, V>
where
    R: TaskRepository,
    V: TaskValidator,
{
    repository: Arc<R>,
    validator: Arc<V>,
}

impl<R, V> TaskCreationService<R, V>
where
    R: TaskRepository,
    V: TaskValidator,
{
    /// Creates a new task creation service.
    #[must_use]
    pub const fn new(repository: Arc<R>, validator: Arc<V>) -> Self {
        Self {
            repository,
            validator,
        }
    }

    /// Validates a payload without persisting anything.
    ///
    /// # Errors
    ///
    /// Returns [`TaskCreationError::MalformedPayload`] when the payload is not
    /// an object and [`TaskCreationError::Validation`] when any field fails.
    pub fn validate(&self, payload: &Value) -> TaskCreationResult<CreateTaskRequest> {
        let Value::Object(fields) = payload else {
            let kind = json_kind(payload);
            tracing::debug!(kind, "rejected non-object task payload");
            return Err(TaskCreationError::MalformedPayload(kind));
        };

        self.validator.validate(fields).map_err(|errors| {
            tracing::debug!(
                error_count = errors.len(),
                fields = ?errors.fields(),
                "rejected task payload"
            );
            TaskCreationError::from(errors)
        })
    }

    /// Validates a payload and persists the resulting task.
    ///
    /// Omitted optional fields take their storage defaults and the stored
    /// task receives a fresh identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskCreationError`] when validation fails or the repository
    /// rejects persistence.
    pub async fn create(&self, payload: &Value) -> TaskCreationResult<Task> {
        let request = self.validate(payload)?;
        let task = Task::from_request(request);
        self.repository.insert(&task).await?;
        tracing::info!(
            task_id = %task.id(),
            status = %task.status(),
            priority = %task.priority(),
            "created task"
        );
        Ok(task)
    }

    /// Retrieves a task by identifier.
    ///
    /// Returns `Ok(None)` when no task has that identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskCreationError::Repository`] when persistence lookup
    /// fails.
    pub async fn find_by_id(&self, id: TaskId) -> TaskCreationResult<Option<Task>> {
        Ok(self.repository.find_by_id(id).await?)
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
