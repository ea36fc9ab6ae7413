use thiserror::Error;

pub type Result<T> = std::result::Result<T, EngineError>;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl EngineError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}
