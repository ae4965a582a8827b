//! Names of the task fields accepted on input.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A field of the task-creation payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TaskField {
    /// Task title.
    #[serde(rename = "title")]
    Title,
    /// Free-form task description.
    #[serde(rename = "description")]
    Description,
    /// Lifecycle status token.
    #[serde(rename = "status")]
    Status,
    /// Priority token.
    #[serde(rename = "priority")]
    Priority,
    /// Due date string.
    #[serde(rename = "dueDate")]
    DueDate,
}

impl TaskField {
    /// Every input field, in the order validation reports them.
    pub const ALL: [Self; 5] = [
        Self::Title,
        Self::Description,
        Self::Status,
        Self::Priority,
        Self::DueDate,
    ];

    /// Returns the key used for this field in request payloads.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::Status => "status",
            Self::Priority => "priority",
            Self::DueDate => "dueDate",
        }
    }
}

impl fmt::Display for TaskField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
