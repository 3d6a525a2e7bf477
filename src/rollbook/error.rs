use thiserror::Error;

#[derive(Error, Debug)]
pub enum RollbookError {
    #[error("Student not found: roll number {0}")]
    NotFound(u32),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Malformed record on line {line}: {reason}")]
    Malformed { line: usize, reason: String },

    #[error("Invalid grade bands: {0}")]
    InvalidBands(String),

    #[error("Access denied")]
    AuthFailed,

    #[error("Config error: {0}")]
    Config(String),

    #[error("Input error: {0}")]
    Input(String),
}

impl RollbookError {
    /// Errors the interactive session reports and then keeps going after.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            RollbookError::NotFound(_) | RollbookError::Io(_) | RollbookError::Config(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, RollbookError>;
