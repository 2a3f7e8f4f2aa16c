use thiserror::Error;

#[derive(Debug, Error)]
pub enum UpdateTodosError {
    #[error("Invalid update_todos arguments: {0}")]
    InvalidArgs(#[from] serde_json::Error),
}
