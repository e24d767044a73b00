//! JSON output, one document per response.

use serde_json::json;

use crate::error::{CommandError, TaskpadError};
use crate::task::Task;

/// Format a notice that carries no task, e.g. the greeting.
///
/// # Errors
///
/// Returns `TaskpadError::Parse` if JSON serialization fails.
pub fn format_notice_json(event: &str, message: &str) -> Result<String, TaskpadError> {
    let output = json!({
        "event": event,
        "message": message,
    });
    Ok(serde_json::to_string(&output)?)
}

/// Format a change to a single task.
///
/// `count` is the list size afterwards, included when the change altered it.
///
/// # Errors
///
/// Returns `TaskpadError::Parse` if JSON serialization fails.
pub fn format_task_event_json(
    event: &str,
    task: &Task,
    count: Option<usize>,
) -> Result<String, TaskpadError> {
    let mut output = json!({
        "event": event,
        "task": task,
    });
    if let Some(count) = count {
        output["count"] = json!(count);
    }
    Ok(serde_json::to_string(&output)?)
}

/// Format a list of tasks.
///
/// # Errors
///
/// Returns `TaskpadError::Parse` if JSON serialization fails.
pub fn format_tasks_json(event: &str, tasks: &[&Task]) -> Result<String, TaskpadError> {
    let output = json!({
        "event": event,
        "count": tasks.len(),
        "items": tasks,
    });
    Ok(serde_json::to_string(&output)?)
}

/// Format a validation failure.
///
/// # Errors
///
/// Returns `TaskpadError::Parse` if JSON serialization fails.
pub fn format_error_json(error: &CommandError) -> Result<String, TaskpadError> {
    let output = json!({
        "event": "error",
        "kind": error.kind(),
        "message": error.to_string(),
    });
    Ok(serde_json::to_string(&output)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::TaskList;
    use serde_json::Value;

    #[test]
    fn test_task_event_with_count() {
        let mut list = TaskList::new();
        let task = list.add_todo("read book");
        let text = format_task_event_json("added", task, Some(1)).unwrap();
        let value: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["event"], "added");
        assert_eq!(value["count"], 1);
        assert_eq!(value["task"]["description"], "read book");
        assert_eq!(value["task"]["kind"]["type"], "todo");
    }

    #[test]
    fn test_task_event_without_count() {
        let mut list = TaskList::new();
        let task = list.add_todo("read book");
        let text = format_task_event_json("marked", task, None).unwrap();
        let value: Value = serde_json::from_str(&text).unwrap();
        assert!(value.get("count").is_none());
    }

    #[test]
    fn test_tasks_json() {
        let mut list = TaskList::new();
        list.add_todo("a");
        list.add_todo("b");
        let text = format_tasks_json("list", &list.find_by_keyword("b")).unwrap();
        let value: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["count"], 1);
        assert_eq!(value["items"][0]["description"], "b");
    }

    #[test]
    fn test_error_json() {
        let text = format_error_json(&CommandError::NoTaskAtIndex).unwrap();
        let value: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["event"], "error");
        assert_eq!(value["kind"], "index_out_of_range");
        assert_eq!(value["message"], "Sorry, there's no task at that index.");
    }
}
