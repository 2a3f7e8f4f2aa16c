//! Transcript file helpers shared by the commands.

use std::path::Path;

use anyhow::{Context, Result};
use serde_json::{Value as JsonValue, json};

/// A transcript as read from disk.
///
/// Keeps the stored document so a wrapper object (`{"id": .., "messages": [..]}`)
/// is written back with its other fields intact.
#[derive(Debug, Default)]
pub struct Transcript {
    document: Option<JsonValue>,
    pub messages: Vec<JsonValue>,
}

/// Load a transcript; no path or a missing file is an empty transcript.
pub fn load(path: Option<&Path>) -> Result<Transcript> {
    let Some(path) = path else {
        return Ok(Transcript::default());
    };
    if !path.exists() {
        tracing::debug!(path = %path.display(), "transcript file not found, starting empty");
        return Ok(Transcript::default());
    }
    let document = plan_core::read_transcript_document(path)
        .with_context(|| format!("Failed to read transcript {}", path.display()))?;
    let messages = plan_core::messages_from_json(document.clone())
        .with_context(|| format!("Failed to read transcript {}", path.display()))?;
    Ok(Transcript {
        document: Some(document),
        messages,
    })
}

impl Transcript {
    /// Append a tool-result message and write the transcript back in its stored shape.
    pub fn append_tool_result(mut self, path: &Path, tool_name: &str, result: JsonValue) -> Result<()> {
        let call_id = format!("call-{}", self.messages.len());
        self.messages.push(tool_result_message(&call_id, tool_name, result));

        let body = serde_json::to_string_pretty(&self.into_document())?;
        std::fs::write(path, body)
            .with_context(|| format!("Failed to write transcript {}", path.display()))
    }

    fn into_document(self) -> JsonValue {
        match self.document {
            Some(JsonValue::Object(mut map)) => {
                map.insert("messages".to_string(), JsonValue::Array(self.messages));
                JsonValue::Object(map)
            }
            _ => JsonValue::Array(self.messages),
        }
    }
}

fn tool_result_message(call_id: &str, tool_name: &str, result: JsonValue) -> JsonValue {
    json!({
        "role": "tool",
        "content": [{
            "type": "tool-result",
            "toolCallId": call_id,
            "toolName": tool_name,
            "output": { "type": "json", "value": result }
        }]
    })
}
