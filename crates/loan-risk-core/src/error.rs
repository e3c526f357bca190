use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoanRiskError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for LoanRiskError {
    fn from(e: serde_json::Error) -> Self {
        LoanRiskError::SerializationError(e.to_string())
    }
}
