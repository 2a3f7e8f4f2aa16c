//! CLI entry point for plan.

mod cli;
mod commands;
mod output;

use clap::Parser;
use plan_observability::ObservabilityConfig;

use crate::cli::Cli;

/// Load `.env` from the current directory or the nearest parent that has one.
fn load_env_file() {
    let Ok(mut dir) = std::env::current_dir() else {
        return;
    };
    for _ in 0..32 {
        let env_file = dir.join(".env");
        if env_file.exists() {
            let _ = dotenvy::from_path(&env_file);
            return;
        }
        if !dir.pop() {
            return;
        }
    }
}

#[tokio::main]
async fn main() {
    load_env_file();
    let cli = Cli::parse();
    output::init(cli.output);

    let mut log_config = ObservabilityConfig::from_env();
    if cli.verbose {
        log_config = log_config.with_log_level("debug");
    }
    if let Err(e) = plan_observability::init(log_config) {
        output::warning(&e.to_string());
    }

    if let Err(e) = commands::handle(cli).await {
        output::error(&format!("{:#}", e));
        std::process::exit(1);
    }
}
