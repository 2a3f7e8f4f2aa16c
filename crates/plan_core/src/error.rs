use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("transcript error: {0}")]
    Transcript(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PlanError>;
