//! `plan show`: print the latest task list in a transcript.

use std::path::Path;

use anyhow::Result;
use plan_core::{PlanConfig, SnapshotSource, TranscriptScanner};

use crate::commands::transcript;
use crate::output;

pub fn handle(path: Option<&Path>) -> Result<()> {
    let config = PlanConfig::from_env();
    let messages = transcript::load(path)?.messages;
    let scanner = TranscriptScanner::new(Some(&messages), &config.recognized_tools);

    output::header("Current plan");
    match scanner.find() {
        Some((index, list)) => {
            output::kv("snapshot", &format!("message {} of {}", index + 1, messages.len()));
            output::tasks(&list);
        }
        None => output::tasks(&scanner.latest_snapshot()),
    }
    Ok(())
}
