pub mod update_todos;

use async_trait::async_trait;
use serde_json::Value as JsonValue;

pub use update_todos::{UpdateTodos, UpdateTodosArgs, UpdateTodosError};

pub type ToolResult = anyhow::Result<JsonValue>;

/// What the runtime hands a tool besides its arguments.
#[derive(Debug, Clone, Copy, Default)]
pub struct ToolContext<'a> {
    /// Conversation so far, oldest first. `None` when the runtime has none.
    pub transcript: Option<&'a [JsonValue]>,
}

impl<'a> ToolContext<'a> {
    pub fn new(transcript: &'a [JsonValue]) -> Self {
        Self {
            transcript: Some(transcript),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }
}

#[async_trait]
pub trait Tool: Send + Sync {
    fn name(&self) -> &'static str;
    fn description(&self) -> &'static str;
    fn parameters_schema(&self) -> JsonValue;
    async fn execute(&self, args: JsonValue, ctx: &ToolContext<'_>) -> ToolResult;
}
