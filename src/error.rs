use thiserror::Error;

pub type Result<T> = std::result::Result<T, KaamdhaamError>;

#[derive(Debug, Error)]
pub enum KaamdhaamError {
    #[error("Project already exists: {0}")]
    ProjectAlreadyExists(String),

    #[error("Project not found: {0}")]
    ProjectNotFound(String),

    #[error("Task not found: {0}")]
    TaskNotFound(String),

    #[error("Task is not in the Done column: {0}")]
    TaskNotInDone(String),

    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
