//! Configuration for plan reconstruction and updates.

use plan_observability::parse_flag;

use crate::update::ApplyOptions;

/// Tool identifiers whose results carry a task-list snapshot.
pub const DEFAULT_RECOGNIZED_TOOLS: &[&str] = &[
    "update_todos",
    "update-todos",
    "updateTodosTool",
    "askForPlanApprovalTool",
    "ask-for-plan-approval",
];

/// The set of tool names the history scanner accepts snapshots from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecognizedTools(Vec<String>);

impl RecognizedTools {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(names.into_iter().map(Into::into).collect())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|n| n == name)
    }

    pub fn names(&self) -> &[String] {
        &self.0
    }
}

impl Default for RecognizedTools {
    fn default() -> Self {
        Self::new(DEFAULT_RECOGNIZED_TOOLS.iter().copied())
    }
}

/// Plan configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanConfig {
    /// Tools whose results are read back as snapshots
    pub recognized_tools: RecognizedTools,
    /// Move untouched `new` tasks to `pending` on every non-empty update
    pub auto_promote_new: bool,
    /// Trim whitespace from added task descriptions
    pub trim_additions: bool,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            recognized_tools: RecognizedTools::default(),
            auto_promote_new: true,
            trim_additions: false,
        }
    }
}

impl PlanConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_recognized_tools(mut self, tools: RecognizedTools) -> Self {
        self.recognized_tools = tools;
        self
    }

    pub fn with_auto_promote(mut self, on: bool) -> Self {
        self.auto_promote_new = on;
        self
    }

    pub fn with_trim_additions(mut self, on: bool) -> Self {
        self.trim_additions = on;
        self
    }

    pub fn apply_options(&self) -> ApplyOptions {
        ApplyOptions {
            auto_promote_new: self.auto_promote_new,
            trim_additions: self.trim_additions,
        }
    }

    /// Load configuration from environment variables
    ///
    /// Reads:
    /// - `PLAN_RECOGNIZED_TOOLS` → comma-separated tool names
    /// - `PLAN_AUTO_PROMOTE` → auto_promote_new
    /// - `PLAN_TRIM_ADDITIONS` → trim_additions
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup("PLAN_RECOGNIZED_TOOLS") {
            let names: Vec<&str> = raw
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .collect();
            if names.is_empty() {
                tracing::warn!("PLAN_RECOGNIZED_TOOLS is empty, keeping defaults");
            } else {
                config.recognized_tools = RecognizedTools::new(names);
            }
        }

        if let Some(raw) = lookup("PLAN_AUTO_PROMOTE") {
            match parse_flag(&raw) {
                Some(on) => config.auto_promote_new = on,
                None => tracing::warn!(value = %raw, "ignoring invalid PLAN_AUTO_PROMOTE"),
            }
        }

        if let Some(raw) = lookup("PLAN_TRIM_ADDITIONS") {
            match parse_flag(&raw) {
                Some(on) => config.trim_additions = on,
                None => tracing::warn!(value = %raw, "ignoring invalid PLAN_TRIM_ADDITIONS"),
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_plan_config_defaults() {
        let config = PlanConfig::new();
        assert!(config.auto_promote_new);
        assert!(!config.trim_additions);
        assert!(config.recognized_tools.contains("updateTodosTool"));
        assert!(config.recognized_tools.contains("update_todos"));
        assert!(!config.recognized_tools.contains("send_email"));
    }

    #[test]
    fn test_plan_config_builder() {
        let config = PlanConfig::new()
            .with_auto_promote(false)
            .with_trim_additions(true)
            .with_recognized_tools(RecognizedTools::new(["planner"]));

        assert!(!config.auto_promote_new);
        assert!(config.trim_additions);
        assert_eq!(config.recognized_tools.names(), &["planner".to_string()]);

        let options = config.apply_options();
        assert!(!options.auto_promote_new);
        assert!(options.trim_additions);
    }

    #[test]
    fn test_from_lookup_reads_all_keys() {
        let config = PlanConfig::from_lookup(lookup_from(&[
            ("PLAN_RECOGNIZED_TOOLS", "planner, todo_writer ,"),
            ("PLAN_AUTO_PROMOTE", "no"),
            ("PLAN_TRIM_ADDITIONS", "TRUE"),
        ]));

        assert_eq!(
            config.recognized_tools,
            RecognizedTools::new(["planner", "todo_writer"])
        );
        assert!(!config.auto_promote_new);
        assert!(config.trim_additions);
    }

    #[test]
    fn test_from_lookup_ignores_invalid_values() {
        let config = PlanConfig::from_lookup(lookup_from(&[
            ("PLAN_RECOGNIZED_TOOLS", " , "),
            ("PLAN_AUTO_PROMOTE", "sometimes"),
        ]));
        assert_eq!(config, PlanConfig::default());
    }

    #[test]
    fn test_from_lookup_accepts_on_off() {
        let config = PlanConfig::from_lookup(lookup_from(&[
            ("PLAN_AUTO_PROMOTE", "off"),
            ("PLAN_TRIM_ADDITIONS", " On "),
        ]));
        assert!(!config.auto_promote_new);
        assert!(config.trim_additions);
    }
}
