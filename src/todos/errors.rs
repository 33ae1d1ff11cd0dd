use thiserror::Error;

/// Errors from the JSON persistence layer.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Failed to access data file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Failed to create directory: {0}")]
    Directory(String),
}

/// Top-level error type for store operations.
#[derive(Error, Debug)]
pub enum TodoError {
    /// Caller submitted input the store refuses, e.g. a blank title.
    #[error("{0}")]
    Validation(String),

    #[error("Task not found: {0}")]
    TaskNotFound(String),

    #[error("Folder not found: {0}")]
    FolderNotFound(String),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl TodoError {
    pub fn validation(msg: impl Into<String>) -> Self {
        TodoError::Validation(msg.into())
    }

    /// True when the caller can fix the input and resubmit.
    pub fn is_validation(&self) -> bool {
        matches!(self, TodoError::Validation(_))
    }
}
