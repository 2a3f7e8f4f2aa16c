mod args;
mod error;

pub use args::UpdateTodosArgs;
pub use error::UpdateTodosError;

use crate::tools::{Tool, ToolContext, ToolResult};
use async_trait::async_trait;
use plan_core::{apply, PlanConfig, SnapshotSource, TaskSnapshot, TranscriptScanner};
use serde_json::Value as JsonValue;
use tracing::{debug, info};

/// Keeps the visible plan current across turns.
///
/// The previous list is rebuilt from the latest snapshot in the transcript;
/// the tool's own result becomes the snapshot for the next call.
pub struct UpdateTodos {
    config: PlanConfig,
}

impl UpdateTodos {
    pub fn new(config: PlanConfig) -> Self {
        Self { config }
    }
}

impl Default for UpdateTodos {
    fn default() -> Self {
        Self::new(PlanConfig::default())
    }
}

#[async_trait]
impl Tool for UpdateTodos {
    fn name(&self) -> &'static str {
        "update_todos"
    }

    fn description(&self) -> &'static str {
        "Manage and update a task list to communicate progress and planned actions. Keep the list current throughout the interaction so the user can see ongoing and planned work."
    }

    fn parameters_schema(&self) -> JsonValue {
        serde_json::json!({
            "type": "object",
            "properties": {
                "new": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "New todo items to add"
                },
                "inProgress": {
                    "type": "array",
                    "items": { "type": "integer" },
                    "description": "Indices of todos to mark as in progress"
                },
                "done": {
                    "type": "array",
                    "items": { "type": "integer" },
                    "description": "Indices of todos to mark as done"
                },
                "clearPreviouslyDone": {
                    "type": "boolean",
                    "default": false,
                    "description": "Remove all completed todos first; indices then refer to the remaining list"
                },
                "insertAt": {
                    "type": "integer",
                    "description": "Index at which to insert new items (0 for beginning, defaults to end of list)"
                }
            },
            "required": ["new", "inProgress", "done"]
        })
    }

    async fn execute(&self, args: JsonValue, ctx: &ToolContext<'_>) -> ToolResult {
        let request: UpdateTodosArgs =
            serde_json::from_value(args).map_err(UpdateTodosError::InvalidArgs)?;

        let scanner = TranscriptScanner::new(ctx.transcript, &self.config.recognized_tools);
        let baseline = scanner.latest_snapshot();
        debug!(baseline = baseline.len(), "update_todos baseline");

        let todos = apply(&baseline, &request, &self.config.apply_options());
        info!(
            added = request.additions.len(),
            in_progress = request.mark_in_progress.len(),
            done = request.mark_done.len(),
            cleared = request.clear_completed,
            before = baseline.len(),
            after = todos.len(),
            "update_todos applied"
        );

        Ok(TaskSnapshot::from(todos).to_json())
    }
}
