//! Validated decoding of the `GET /tasks` body.
//!
//! The list endpoint is only trusted when it answers `{"tasks": [Task, ...]}`.
//! Anything else becomes a [`MalformedListing`] instead of a guess.

use serde_json::Value;
use thiserror::Error;

use crate::task::Task;

/// Why a list response was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedListing {
    #[error("expected a JSON object, found {found}")]
    NotAnObject { found: &'static str },

    #[error("response has no `tasks` field")]
    MissingTasks,

    #[error("`tasks` must be an array, found {found}")]
    TasksNotArray { found: &'static str },

    #[error("task at index {index} is invalid: {reason}")]
    InvalidTask { index: usize, reason: String },
}

/// Name of a JSON value's kind, for diagnostics.
const fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Decode a list response into tasks, preserving server order.
///
/// Only the plural `tasks` field is read.
///
/// # Errors
/// Returns [`MalformedListing`] when the body is not an object, has no
/// array-valued `tasks` field, or contains an element that is not a task.
pub fn decode_listing(body: Value) -> Result<Vec<Task>, MalformedListing> {
    let mut fields = match body {
        Value::Object(fields) => fields,
        other => {
            return Err(MalformedListing::NotAnObject {
                found: kind_of(&other),
            });
        }
    };

    let items = match fields.remove("tasks") {
        Some(Value::Array(items)) => items,
        Some(other) => {
            return Err(MalformedListing::TasksNotArray {
                found: kind_of(&other),
            });
        }
        None => return Err(MalformedListing::MissingTasks),
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value::<Task>(item).map_err(|e| MalformedListing::InvalidTask {
                index,
                reason: e.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::expect_used)]

    use super::*;
    use serde_json::json;

    #[test]
    fn test_decodes_tasks_in_order() {
        let body = json!({"tasks": [
            {"id": 2, "title": "B", "description": "second"},
            {"id": 1, "title": "A", "description": "first"},
        ]});
        let tasks = decode_listing(body).expect("valid listing");
        assert_eq!(
            tasks,
            vec![Task::new(2, "B", "second"), Task::new(1, "A", "first")]
        );
    }

    #[test]
    fn test_empty_array_is_valid() {
        assert_eq!(decode_listing(json!({"tasks": []})), Ok(vec![]));
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let body = json!({
            "tasks": [{"id": 7, "title": "T", "description": "D", "done": true}],
            "next_cursor": null,
        });
        assert_eq!(decode_listing(body), Ok(vec![Task::new(7, "T", "D")]));
    }

    #[test]
    fn test_empty_object_is_missing_tasks() {
        assert_eq!(
            decode_listing(json!({})),
            Err(MalformedListing::MissingTasks)
        );
    }

    #[test]
    fn test_singular_task_field_is_not_read() {
        let body = json!({"task": [{"id": 1, "title": "A", "description": "d"}]});
        assert_eq!(decode_listing(body), Err(MalformedListing::MissingTasks));
    }

    #[test]
    fn test_bare_array_is_not_an_object() {
        assert_eq!(
            decode_listing(json!([])),
            Err(MalformedListing::NotAnObject { found: "array" })
        );
    }

    #[test]
    fn test_null_tasks_is_not_array() {
        assert_eq!(
            decode_listing(json!({"tasks": null})),
            Err(MalformedListing::TasksNotArray { found: "null" })
        );
    }

    #[test]
    fn test_bad_element_reports_index() {
        let body = json!({"tasks": [
            {"id": 1, "title": "A", "description": "d"},
            {"id": "two", "title": "B", "description": "e"},
        ]});
        let err = decode_listing(body).expect_err("second element is invalid");
        assert!(matches!(err, MalformedListing::InvalidTask { index: 1, .. }));
    }
}
