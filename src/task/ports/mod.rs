//! Port contracts for task creation.
//!
//! Ports define infrastructure-agnostic interfaces used by task services.

pub mod repository;
pub mod validator;

pub use repository::{TaskRepository, TaskRepositoryError, TaskRepositoryResult};
pub use validator::{TaskValidator, ValidationConfig, ValidationResult};
