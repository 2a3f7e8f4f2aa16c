//! Transcript fixtures shared by the integration tests.

use plan_core::{Task, TaskList, TaskStatus};
use serde_json::{json, Value as JsonValue};

/// A user message with plain text content.
#[allow(dead_code)]
pub fn user(text: &str) -> JsonValue {
    json!({ "role": "user", "content": [{ "type": "text", "text": text }] })
}

/// A tool message carrying an `updateTodosTool` result.
#[allow(dead_code)]
pub fn todos_result(todos: JsonValue) -> JsonValue {
    json!({
        "role": "tool",
        "content": [{
            "type": "tool-result",
            "toolCallId": "call-todos",
            "toolName": "updateTodosTool",
            "output": { "type": "json", "value": { "todos": todos } }
        }]
    })
}

/// Build a list from `(text, status)` pairs.
#[allow(dead_code)]
pub fn tasks(items: &[(&str, TaskStatus)]) -> TaskList {
    items
        .iter()
        .map(|(text, status)| Task::new(*text).with_status(*status))
        .collect()
}
