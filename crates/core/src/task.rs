//! Task wire types.

use serde::{Deserialize, Serialize};

/// Server-assigned task identifier.
pub type TaskId = i64;

/// A task as reported by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: String,
}

impl Task {
    /// Create a task record.
    pub fn new(id: TaskId, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Body of a create request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTask {
    pub title: String,
    pub description: String,
}

impl NewTask {
    /// Payload sent by the "Create" action.
    #[must_use]
    pub fn placeholder() -> Self {
        Self {
            title: "New Task".to_string(),
            description: "Task description".to_string(),
        }
    }
}

/// Body of an update request. Unset fields are left out of the JSON entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl TaskPatch {
    /// Payload sent by the "Update" action.
    #[must_use]
    pub fn placeholder() -> Self {
        Self {
            title: Some("Updated Task Title".to_string()),
            description: None,
        }
    }
}

/// One rendered list line: `"{title} - {description}"`.
#[must_use]
pub fn task_line(task: &Task) -> String {
    format!("{} - {}", task.title, task.description)
}
