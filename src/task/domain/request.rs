//! Validated request for creating a task.

use super::{DueDate, EmptyTaskTitle, TaskPriority, TaskStatus};
use serde::Serialize;

/// Typed, validated representation of a prospective task.
///
/// Optional fields are present only when the caller supplied them; storage
/// defaults are not applied here. The title is guaranteed to contain at least
/// one non-whitespace character.
///
/// # Examples
///
/// ```
/// use taskboard::task::domain::{CreateTaskRequest, TaskPriority};
///
/// let request = CreateTaskRequest::new("Ship release")
///     .expect("non-empty title")
///     .with_priority(TaskPriority::High);
/// assert_eq!(request.title(), "Ship release");
/// assert_eq!(request.status(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<TaskStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    priority: Option<TaskPriority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    due_date: Option<DueDate>,
}

impl CreateTaskRequest {
    /// Creates a request carrying only a title.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyTaskTitle`] when the title is empty or whitespace-only.
    pub fn new(title: impl Into<String>) -> Result<Self, EmptyTaskTitle> {
        let title_text = title.into();
        check_title(&title_text)?;
        Ok(Self {
            title: title_text,
            description: None,
            status: None,
            priority: None,
            due_date: None,
        })
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the status.
    #[must_use]
    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the priority.
    #[must_use]
    pub fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Sets the due date.
    #[must_use]
    pub fn with_due_date(mut self, due_date: DueDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description, if supplied.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the status, if supplied.
    #[must_use]
    pub const fn status(&self) -> Option<TaskStatus> {
        self.status
    }

    /// Returns the priority, if supplied.
    #[must_use]
    pub const fn priority(&self) -> Option<TaskPriority> {
        self.priority
    }

    /// Returns the due date, if supplied.
    #[must_use]
    pub const fn due_date(&self) -> Option<DueDate> {
        self.due_date
    }

    pub(super) fn into_parts(
        self,
    ) -> (
        String,
        Option<String>,
        Option<TaskStatus>,
        Option<TaskPriority>,
        Option<DueDate>,
    ) {
        (
            self.title,
            self.description,
            self.status,
            self.priority,
            self.due_date,
        )
    }
}

/// Rejects titles that are empty or whitespace-only.
pub(super) fn check_title(title: &str) -> Result<(), EmptyTaskTitle> {
    if title.trim().is_empty() {
        return Err(EmptyTaskTitle);
    }
    Ok(())
}
