use thiserror::Error;

#[derive(Debug, Error)]
pub enum FinLogicError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for FinLogicError {
    fn from(e: serde_json::Error) -> Self {
        FinLogicError::SerializationError(e.to_string())
    }
}
