pub mod tools;

#[cfg(test)]
mod tests;

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Result, anyhow};
use plan_core::PlanConfig;
use serde_json::Value as JsonValue;
use tracing::{info, warn};

pub use tools::{Tool, ToolContext, ToolResult, UpdateTodos, UpdateTodosArgs, UpdateTodosError};

pub struct ToolBus {
    config: PlanConfig,
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl ToolBus {
    pub fn new(config: PlanConfig) -> Self {
        let mut bus = Self {
            config,
            tools: HashMap::new(),
        };
        bus.register_defaults();
        bus
    }

    fn register_defaults(&mut self) {
        let update_todos = UpdateTodos::new(self.config.clone());
        self.register(update_todos);
    }

    pub fn register<T: Tool + 'static>(&mut self, tool: T) {
        self.tools.insert(tool.name().to_string(), Arc::new(tool));
    }

    pub async fn call(
        &self,
        tool_name: &str,
        args: JsonValue,
        ctx: &ToolContext<'_>,
    ) -> Result<(JsonValue, u64)> {
        let tool = self
            .tools
            .get(tool_name)
            .ok_or_else(|| anyhow!("Tool not found: {}", tool_name))?;

        let start = Instant::now();
        let result = tool.execute(args, ctx).await;
        let duration_ms = start.elapsed().as_millis() as u64;

        match result {
            Ok(output) => {
                info!("Tool {} completed in {}ms", tool_name, duration_ms);
                Ok((output, duration_ms))
            }
            Err(e) => {
                warn!("Tool {} failed: {}", tool_name, e);
                Err(e)
            }
        }
    }

    pub fn list_tools(&self) -> Vec<ToolInfo> {
        let mut tools: Vec<ToolInfo> = self
            .tools
            .values()
            .map(|t| ToolInfo {
                name: t.name().to_string(),
                description: t.description().to_string(),
                parameters: t.parameters_schema(),
            })
            .collect();
        tools.sort_by(|a, b| a.name.cmp(&b.name));
        tools
    }

    pub fn config(&self) -> &PlanConfig {
        &self.config
    }
}

#[derive(Debug, Clone)]
pub struct ToolInfo {
    pub name: String,
    pub description: String,
    pub parameters: JsonValue,
}
