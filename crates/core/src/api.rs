//! The request/response seam between the task board and the task API.
//!
//! Browser futures are `!Send`, so the trait is declared `?Send`.

use std::rc::Rc;

use async_trait::async_trait;
use serde_json::Value;

use crate::result::Result;
use crate::task::{NewTask, Task, TaskId, TaskPatch};

/// One method per endpoint. Every call is exactly one request: no retries,
/// no caching, no shared state.
#[async_trait(?Send)]
pub trait TaskApi {
    /// `GET /tasks`. Returns the raw JSON body; shape checks belong to the caller.
    ///
    /// # Errors
    /// Transport failure, non-success status, or a body that is not JSON.
    async fn list_tasks(&self) -> Result<Value>;

    /// `POST /tasks`. Success is decided by the status alone; the created
    /// task is returned when the server echoes one back.
    ///
    /// # Errors
    /// Transport failure or non-success status.
    async fn create_task(&self, input: &NewTask) -> Result<Option<Task>>;

    /// `PATCH /tasks/{id}`. An unknown id surfaces as a non-success status.
    /// The updated task is returned when the server echoes one back.
    ///
    /// # Errors
    /// Transport failure or non-success status.
    async fn update_task(&self, id: TaskId, patch: &TaskPatch) -> Result<Option<Task>>;

    /// `DELETE /tasks/{id}`. Any response body is ignored.
    ///
    /// # Errors
    /// Transport failure or non-success status.
    async fn delete_task(&self, id: TaskId) -> Result<()>;

    /// `GET /`. Returns the server's greeting message.
    ///
    /// # Errors
    /// Transport failure, non-success status, or no `message` string in the body.
    async fn server_status(&self) -> Result<String>;
}

#[async_trait(?Send)]
impl<A: TaskApi + ?Sized> TaskApi for Rc<A> {
    async fn list_tasks(&self) -> Result<Value> {
        (**self).list_tasks().await
    }

    async fn create_task(&self, input: &NewTask) -> Result<Option<Task>> {
        (**self).create_task(input).await
    }

    async fn update_task(&self, id: TaskId, patch: &TaskPatch) -> Result<Option<Task>> {
        (**self).update_task(id, patch).await
    }

    async fn delete_task(&self, id: TaskId) -> Result<()> {
        (**self).delete_task(id).await
    }

    async fn server_status(&self) -> Result<String> {
        (**self).server_status().await
    }
}

/// Pull the `message` string out of a `GET /` body.
///
/// # Errors
/// Returns [`crate::RequestError::Decode`] if there is no string `message` field.
pub fn status_message(body: &Value) -> Result<String> {
    body.get("message")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| crate::RequestError::decode("missing `message` string"))
}

/// Read the task a mutation echoed back, if the body is one.
///
/// Servers are free to answer a successful write with anything (an empty
/// body, `{"message": ...}`), so a body that is not a task is only logged.
#[must_use]
pub fn echoed_task(body: &str) -> Option<Task> {
    if body.trim().is_empty() {
        return None;
    }
    serde_json::from_str::<Task>(body)
        .map_err(|e| tracing::debug!(error = %e, "mutation response is not a task"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_echoed_task_decodes_task_body() {
        assert_eq!(
            echoed_task(r#"{"id": 4, "title": "New Task", "description": "Task description"}"#),
            Some(Task::new(4, "New Task", "Task description"))
        );
    }

    #[test]
    fn test_echoed_task_tolerates_other_bodies() {
        assert_eq!(echoed_task(""), None);
        assert_eq!(echoed_task("  \n"), None);
        assert_eq!(
            echoed_task(r#"{"message": "Task created successfully", "notion_response": {}}"#),
            None
        );
        assert_eq!(echoed_task("OK"), None);
    }

    #[test]
    fn test_status_message_present() {
        let body = json!({"message": "Notion Task Manager is Running"});
        assert_eq!(
            status_message(&body),
            Ok("Notion Task Manager is Running".to_string())
        );
    }

    #[test]
    fn test_status_message_missing() {
        assert!(status_message(&json!({"status": "ok"})).is_err());
        assert!(status_message(&json!({"message": 3})).is_err());
    }
}
