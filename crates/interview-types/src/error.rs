use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum InterviewError {
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Timeout after {0}ms")]
    Timeout(u64),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl InterviewError {
    pub fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        InterviewError::NotFound { kind, id: id.into() }
    }

    /// Errors the caller caused and can fix by changing the request.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            InterviewError::NotFound { .. }
                | InterviewError::InvalidState(_)
                | InterviewError::InvalidInput(_)
        )
    }
}

impl From<serde_json::Error> for InterviewError {
    fn from(e: serde_json::Error) -> Self {
        InterviewError::Serialization(e.to_string())
    }
}
