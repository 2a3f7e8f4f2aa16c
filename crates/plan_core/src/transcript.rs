//! History scanner: finds the most recent task-list snapshot in a transcript.
//!
//! The transcript is the only place plan state lives between turns. Messages
//! are opaque JSON; only a small closed set of shapes is recognised:
//!
//! - a message whose `content` (one part or an array of parts) holds a
//!   `tool-result` part with `output`, or a `tool-call` part with `result`,
//!   from one of the recognised tools
//! - a message that is itself a snapshot (`{"todos": [...]}`)
//!
//! A result payload is either the snapshot or `{"value": snapshot}`.
//! Anything else is skipped, and scanning moves on to older entries.

use serde::Deserialize;
use serde_json::Value as JsonValue;

use crate::config::RecognizedTools;
use crate::error::{PlanError, Result};
use crate::task::{TaskList, TaskSnapshot};

/// Something that can produce the baseline task list for an update.
pub trait SnapshotSource {
    fn latest_snapshot(&self) -> TaskList;
}

/// A fixed baseline, for callers that already hold the list.
impl SnapshotSource for TaskList {
    fn latest_snapshot(&self) -> TaskList {
        self.clone()
    }
}

/// Scans a borrowed transcript newest → oldest. Never mutates it.
#[derive(Debug, Clone, Copy)]
pub struct TranscriptScanner<'a> {
    messages: Option<&'a [JsonValue]>,
    recognized: &'a RecognizedTools,
}

impl<'a> TranscriptScanner<'a> {
    pub fn new(messages: Option<&'a [JsonValue]>, recognized: &'a RecognizedTools) -> Self {
        Self {
            messages,
            recognized,
        }
    }

    /// Index of the message the latest snapshot came from, with the snapshot.
    pub fn find(&self) -> Option<(usize, TaskList)> {
        let messages = self.messages?;
        messages
            .iter()
            .enumerate()
            .rev()
            .find_map(|(index, message)| self.snapshot_in(message).map(|list| (index, list)))
    }

    fn snapshot_in(&self, message: &JsonValue) -> Option<TaskList> {
        if let Some(content) = message.get("content") {
            let parts: &[JsonValue] = match content {
                JsonValue::Array(parts) => parts,
                single => std::slice::from_ref(single),
            };
            let found = parts.iter().rev().find_map(|part| self.snapshot_in_part(part));
            if found.is_some() {
                return found;
            }
        }

        if message.get("todos").is_some() || message.get("tasks").is_some() {
            return parse_snapshot(message);
        }
        None
    }

    fn snapshot_in_part(&self, part: &JsonValue) -> Option<TaskList> {
        let part = match ContentPart::deserialize(part) {
            Ok(part) => part,
            Err(e) => {
                tracing::debug!(error = %e, "skipping unrecognised content part");
                return None;
            }
        };

        let (tool_name, payload) = match part {
            ContentPart::ToolResult { tool_name, output } => (tool_name, output),
            ContentPart::ToolCall {
                tool_name,
                result: Some(result),
            } => (tool_name, result),
            ContentPart::ToolCall { result: None, .. } | ContentPart::Other => return None,
        };

        if !self.recognized.contains(&tool_name) {
            return None;
        }

        let inner = match payload.get("value") {
            Some(value) if payload.get("todos").is_none() && payload.get("tasks").is_none() => {
                value
            }
            _ => &payload,
        };
        parse_snapshot(inner)
    }
}

impl SnapshotSource for TranscriptScanner<'_> {
    fn latest_snapshot(&self) -> TaskList {
        match self.find() {
            Some((index, list)) => {
                tracing::debug!(message = index, tasks = list.len(), "found task snapshot");
                list
            }
            None => {
                tracing::debug!("no task snapshot in transcript, starting empty");
                TaskList::new()
            }
        }
    }
}

/// Pull the message array out of a stored transcript.
///
/// Accepts a bare JSON array of messages or an object with a `messages` array.
pub fn messages_from_json(value: JsonValue) -> Result<Vec<JsonValue>> {
    match value {
        JsonValue::Array(messages) => Ok(messages),
        JsonValue::Object(mut map) => match map.remove("messages") {
            Some(JsonValue::Array(messages)) => Ok(messages),
            Some(_) => Err(PlanError::Transcript("`messages` is not an array".to_string())),
            None => Err(PlanError::Transcript("missing `messages` array".to_string())),
        },
        _ => Err(PlanError::Transcript(
            "expected an array of messages or an object with `messages`".to_string(),
        )),
    }
}

/// Read a transcript file. An empty file is an empty transcript.
pub fn read_transcript(path: &std::path::Path) -> Result<Vec<JsonValue>> {
    messages_from_json(read_transcript_document(path)?)
}

/// Read a transcript file as stored, wrapper object included.
///
/// An empty file reads as an empty array.
pub fn read_transcript_document(path: &std::path::Path) -> Result<JsonValue> {
    let raw = std::fs::read_to_string(path)?;
    if raw.trim().is_empty() {
        return Ok(JsonValue::Array(Vec::new()));
    }
    Ok(serde_json::from_str(&raw)?)
}

fn parse_snapshot(value: &JsonValue) -> Option<TaskList> {
    match TaskSnapshot::deserialize(value) {
        Ok(snapshot) => Some(snapshot.todos),
        Err(e) => {
            tracing::debug!(error = %e, "skipping malformed task snapshot");
            None
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
enum ContentPart {
    #[serde(rename = "tool-result")]
    ToolResult {
        #[serde(rename = "toolName")]
        tool_name: String,
        output: JsonValue,
    },
    #[serde(rename = "tool-call")]
    ToolCall {
        #[serde(rename = "toolName")]
        tool_name: String,
        #[serde(default)]
        result: Option<JsonValue>,
    },
    #[serde(other)]
    Other,
}
