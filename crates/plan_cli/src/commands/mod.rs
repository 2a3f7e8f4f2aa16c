//! Command dispatch.

pub mod show;
pub mod toolbus;
pub mod transcript;
pub mod update;

use anyhow::Result;

use crate::cli::{Cli, Command};

pub async fn handle(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Show { transcript } => show::handle(transcript.as_deref()),
        Command::Update {
            transcript,
            additions,
            in_progress,
            done,
            clear_done,
            insert_at,
            append,
        } => {
            let request = plan_core::UpdateRequest {
                additions,
                mark_in_progress: in_progress,
                mark_done: done,
                clear_completed: clear_done,
                insert_at,
            };
            update::handle(transcript.as_deref(), request, append).await
        }
        Command::Toolbus { action } => toolbus::handle(action).await,
    }
}
