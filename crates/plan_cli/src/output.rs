//! Terminal output helpers — dual-mode: styled text for humans, structured JSON for machines.
//!
//! Uses:
//! - `console` for colors (respects NO_COLOR, auto-disables when piped)
//! - `comfy-table` for structured data
//! - `indicatif` for spinners

use std::sync::atomic::{AtomicBool, Ordering};

use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table, presets::UTF8_FULL};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use plan_core::{TaskList, TaskStatus};
use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::cli::OutputFormat;

// ── Global format flag ─────────────────────────────────────────────

static JSON_MODE: AtomicBool = AtomicBool::new(false);

pub fn init(format: OutputFormat) {
    if matches!(format, OutputFormat::Json) {
        JSON_MODE.store(true, Ordering::Relaxed);
    }
}

fn is_json() -> bool {
    JSON_MODE.load(Ordering::Relaxed)
}

// ── JSON envelope ──────────────────────────────────────────────────

#[derive(Serialize)]
struct Msg<'a> {
    level: &'a str,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<&'a JsonValue>,
}

fn emit_json(level: &str, message: &str, data: Option<&JsonValue>) {
    let msg = Msg {
        level,
        message,
        data,
    };
    let json = serde_json::to_string(&msg)
        .unwrap_or_else(|_| format!("{{\"level\":\"{level}\",\"message\":\"{message}\"}}"));
    println!("{json}");
}

// ── Public helpers ─────────────────────────────────────────────────

pub fn header(text: &str) {
    if is_json() {
        emit_json("info", text, None);
    } else {
        println!("{}", style(text).bold().cyan());
    }
}

pub fn success(text: &str) {
    if is_json() {
        emit_json("success", text, None);
    } else {
        println!("{} {}", style("✓").green(), style(text).bright());
    }
}

pub fn error(text: &str) {
    if is_json() {
        let msg = Msg {
            level: "error",
            message: text,
            data: None,
        };
        let json = serde_json::to_string(&msg).unwrap_or_default();
        eprintln!("{json}");
    } else {
        eprintln!("{} {}", style("✗").red(), style(text).bright());
    }
}

pub fn warning(text: &str) {
    if is_json() {
        emit_json("warning", text, None);
    } else {
        eprintln!("{} {}", style("!").yellow(), style(text).bright());
    }
}

pub fn dim(text: &str) {
    if is_json() {
        emit_json("info", text, None);
    } else {
        println!("{}", style(text).dim());
    }
}

pub fn json_pretty(value: &JsonValue) {
    if is_json() {
        emit_json("data", "", Some(value));
    } else {
        let formatted = serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string());
        println!("{formatted}");
    }
}

/// Print a key-value pair with styled key.
pub fn kv(key: &str, value: &str) {
    if is_json() {
        let data = serde_json::json!({ key: value });
        emit_json("info", key, Some(&data));
    } else {
        println!("  {} {}", style(key).cyan().bold(), value);
    }
}

// ── Tables ─────────────────────────────────────────────────────────

/// Create a styled table for listing items.
pub fn table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Add a header row to the table.
pub fn table_header(table: &mut Table, columns: &[&str]) {
    table.set_header(
        columns
            .iter()
            .map(|c| Cell::new(c).fg(Color::Cyan).add_attribute(Attribute::Bold)),
    );
}

/// Print a table (JSON mode emits `data` instead).
pub fn table_print(table: &Table, label: &str, data: &JsonValue) {
    if is_json() {
        emit_json("list", label, Some(data));
    } else {
        println!("{table}");
    }
}

/// Print a task list as an index/status/text table.
pub fn tasks(list: &TaskList) {
    if list.is_empty() {
        if is_json() {
            emit_json("list", "todos", Some(&serde_json::json!({ "todos": [] })));
        } else {
            dim("No tasks");
        }
        return;
    }

    let mut table = table();
    table_header(&mut table, &["#", "Status", "Task"]);
    for (index, task) in list.iter().enumerate() {
        table.add_row(vec![
            Cell::new(index),
            Cell::new(task.status).fg(status_color(task.status)),
            Cell::new(&task.text),
        ]);
    }

    table_print(&table, "todos", &serde_json::json!({ "todos": list }));
}

fn status_color(status: TaskStatus) -> Color {
    match status {
        TaskStatus::New => Color::Cyan,
        TaskStatus::Pending => Color::Yellow,
        TaskStatus::InProgress => Color::Blue,
        TaskStatus::Done => Color::Green,
    }
}

// ── Spinners ───────────────────────────────────────────────────────

/// Create a spinner for async operations.
pub fn spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(std::time::Duration::from_millis(80));
    spinner
}

/// Finish spinner with success message.
pub fn spinner_success(spinner: &ProgressBar, message: &str) {
    spinner.finish_and_clear();
    success(message);
}

/// Finish spinner with error message.
pub fn spinner_error(spinner: &ProgressBar, message: &str) {
    spinner.finish_and_clear();
    error(message);
}
