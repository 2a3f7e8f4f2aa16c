//! `plan toolbus` subcommands.

use std::path::Path;

use anyhow::{Result, anyhow};
use plan_core::PlanConfig;
use plan_toolbus::{ToolBus, ToolContext};
use serde_json::Value as JsonValue;

use crate::cli::ToolbusAction;
use crate::commands::transcript;
use crate::output;

pub async fn handle(action: ToolbusAction) -> Result<()> {
    let bus = ToolBus::new(PlanConfig::from_env());

    match action {
        ToolbusAction::List => list(&bus),
        ToolbusAction::Info { tool } => info(&bus, &tool),
        ToolbusAction::Call {
            tool,
            args,
            transcript,
        } => call(&bus, &tool, &args, transcript.as_deref()).await,
    }
}

fn list(bus: &ToolBus) -> Result<()> {
    let tools = bus.list_tools();

    if tools.is_empty() {
        output::dim("No tools registered");
        return Ok(());
    }

    output::header("Registered Tools");

    let mut table = output::table();
    output::table_header(&mut table, &["Tool", "Description"]);
    let mut items = Vec::with_capacity(tools.len());
    for t in &tools {
        table.add_row(vec![t.name.as_str(), t.description.as_str()]);
        items.push(serde_json::json!({ "name": t.name, "description": t.description }));
    }

    output::table_print(&table, "tools", &serde_json::json!({ "items": items }));

    Ok(())
}

fn info(bus: &ToolBus, tool_name: &str) -> Result<()> {
    let tools = bus.list_tools();
    let tool = tools
        .iter()
        .find(|t| t.name == tool_name)
        .ok_or_else(|| anyhow!("Tool not found: {}", tool_name))?;

    output::header(&format!("Tool: {}", tool.name));
    output::dim(&tool.description);
    println!();
    output::header("Parameters");
    output::json_pretty(&tool.parameters);

    Ok(())
}

async fn call(bus: &ToolBus, tool_name: &str, args_str: &str, path: Option<&Path>) -> Result<()> {
    let args: JsonValue =
        serde_json::from_str(args_str).map_err(|e| anyhow!("Invalid JSON arguments: {}", e))?;
    let messages = transcript::load(path)?.messages;

    let spinner = output::spinner(&format!("Calling {}...", tool_name));

    let (result, duration_ms) = match bus.call(tool_name, args, &ToolContext::new(&messages)).await {
        Ok(ok) => ok,
        Err(e) => {
            output::spinner_error(&spinner, &format!("{} failed", tool_name));
            return Err(e);
        }
    };

    output::spinner_success(&spinner, &format!("Completed in {}ms", duration_ms));
    println!();
    output::json_pretty(&result);

    Ok(())
}
