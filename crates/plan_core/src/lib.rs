//! Plan state for a human-in-the-loop agent.
//!
//! The task list has no store of its own: every update rebuilds it from the
//! latest snapshot embedded in the conversation transcript
//! ([`TranscriptScanner`]), applies one [`UpdateRequest`] with [`apply`], and
//! hands the result back to the runtime, which appends it to the transcript.

pub mod config;
pub mod error;
pub mod task;
pub mod transcript;
pub mod update;

pub use config::{PlanConfig, RecognizedTools, DEFAULT_RECOGNIZED_TOOLS};
pub use error::{PlanError, Result};
pub use task::{Task, TaskList, TaskSnapshot, TaskStatus};
pub use transcript::{
    messages_from_json, read_transcript, read_transcript_document, SnapshotSource,
    TranscriptScanner,
};
pub use update::{apply, ApplyOptions, UpdateRequest};

/// Rebuild the list from `source` and apply `request` to it.
pub fn reconstruct_and_apply<S: SnapshotSource + ?Sized>(
    source: &S,
    request: &UpdateRequest,
    config: &PlanConfig,
) -> TaskList {
    let baseline = source.latest_snapshot();
    apply(&baseline, request, &config.apply_options())
}
