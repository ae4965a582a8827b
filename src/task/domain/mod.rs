//! Domain model for task records.
//!
//! The task domain declares the closed status and priority enumerations, the
//! persisted record shape, and the validated creation request. No validation
//! of untyped input happens here; see [`crate::task::validation`].

mod due_date;
mod error;
mod field;
mod ids;
mod request;
mod task;

pub use due_date::DueDate;
pub use error::{
    EmptyTaskTitle, ParseDueDateError, ParseTaskPriorityError, ParseTaskStatusError,
};
pub use field::TaskField;
pub use ids::TaskId;
pub use request::CreateTaskRequest;
pub use task::{Task, TaskPriority, TaskStatus};
