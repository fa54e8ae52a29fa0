use serde::{Deserialize, Serialize};

/// Identifier assigned to a task by the repository
pub type TaskId = i64;

/// A single entry in the task list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Repository-assigned identifier, never changed after creation
    pub id: TaskId,

    /// Free-form label
    pub title: String,
}

impl Task {
    /// Create a task record with the given identifier and title
    pub fn new(id: TaskId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
        }
    }
}

/// Fields a client may supply when creating or updating a task
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskInput {
    /// New title; a missing field reads as the empty string
    #[serde(default)]
    pub title: String,
}
