//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Inspect and update task lists stored in agent transcripts
#[derive(Parser)]
#[command(name = "plan", about, version, propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose (debug) logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format: text (human-readable) or json (machine-readable)
    #[arg(short, long, global = true, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    /// Colored terminal output for humans
    #[default]
    Text,
    /// Structured JSON for AI and machine consumption
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show the latest task list found in a transcript
    Show {
        /// Transcript file (JSON array of messages); omitted means empty
        #[arg(short, long)]
        transcript: Option<PathBuf>,
    },
    /// Apply one update to the latest task list in a transcript
    Update {
        /// Transcript file (JSON array of messages); omitted means empty
        #[arg(short, long)]
        transcript: Option<PathBuf>,
        /// Task to add (repeatable)
        #[arg(long = "new", value_name = "TEXT")]
        additions: Vec<String>,
        /// Index to mark in progress (repeatable)
        #[arg(long = "in-progress", value_name = "INDEX", allow_negative_numbers = true)]
        in_progress: Vec<i64>,
        /// Index to mark done (repeatable)
        #[arg(long, value_name = "INDEX", allow_negative_numbers = true)]
        done: Vec<i64>,
        /// Remove completed tasks before applying marks
        #[arg(long)]
        clear_done: bool,
        /// Position for new tasks (default: end of list)
        #[arg(long, value_name = "INDEX", allow_negative_numbers = true)]
        insert_at: Option<i64>,
        /// Write the result back to the transcript as a tool message
        #[arg(long, requires = "transcript")]
        append: bool,
    },
    /// Inspect and call ToolBus tools
    Toolbus {
        #[command(subcommand)]
        action: ToolbusAction,
    },
}

#[derive(Subcommand)]
pub enum ToolbusAction {
    /// List registered tools
    List,
    /// Show a tool's description and parameter schema
    Info {
        /// Tool name
        tool: String,
    },
    /// Call a tool with JSON arguments
    Call {
        /// Tool name
        tool: String,
        /// Arguments as a JSON object
        args: String,
        /// Transcript the tool sees as prior conversation
        #[arg(short, long)]
        transcript: Option<PathBuf>,
    },
}
