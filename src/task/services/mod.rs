//! Application services for task creation.

mod creation;

pub use creation::{TaskCreationError, TaskCreationResult, TaskCreationService};
