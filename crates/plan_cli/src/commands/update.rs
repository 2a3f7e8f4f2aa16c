//! `plan update`: apply one update through the `update_todos` tool.

use std::path::Path;

use anyhow::{Result, anyhow};
use plan_core::{PlanConfig, TaskSnapshot, UpdateRequest};
use plan_toolbus::{Tool, ToolBus, ToolContext, UpdateTodos};

use crate::commands::transcript;
use crate::output;

pub async fn handle(path: Option<&Path>, request: UpdateRequest, append: bool) -> Result<()> {
    let bus = ToolBus::new(PlanConfig::from_env());
    let tool_name = UpdateTodos::default().name();
    let stored = transcript::load(path)?;

    let args = serde_json::to_value(&request)?;
    let (result, duration_ms) = bus
        .call(tool_name, args, &ToolContext::new(&stored.messages))
        .await?;

    let snapshot: TaskSnapshot = serde_json::from_value(result.clone())?;
    output::success(&format!("Updated plan in {}ms", duration_ms));
    output::tasks(&snapshot.todos);

    if append {
        let path = path.ok_or_else(|| anyhow!("--append needs --transcript"))?;
        stored.append_tool_result(path, tool_name, result)?;
        output::kv("appended to", &path.display().to_string());
    }
    Ok(())
}
