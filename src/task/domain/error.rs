//! Error types for parsing task domain values.

use thiserror::Error;

/// Error returned while parsing a task status token.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// Error returned while parsing a task priority token.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task priority: {0}")]
pub struct ParseTaskPriorityError(pub String);

/// Error returned when a due date string is not an ISO 8601 date or date-time.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid due date '{0}', expected an ISO 8601 date or date-time")]
pub struct ParseDueDateError(pub String);

/// Error returned when a task title is empty after trimming.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("task title must not be empty")]
pub struct EmptyTaskTitle;
