use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Not found")]
    NotFound,

    #[error("Invalid input: {0}")]
    Invalid(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Invalid token")]
    InvalidToken,

    #[error("Forbidden")]
    Forbidden,

    /// The hosted backend reported that a table does not exist.
    #[error("Table {0} does not exist")]
    TableMissing(String),

    #[error("Internal server error")]
    InternalServerError,

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("AI gateway API key is not configured")]
    AiNotConfigured,

    #[error("AI gateway rate limit exceeded")]
    AiRateLimited,

    #[error("AI gateway credits exhausted")]
    AiInsufficientCredits,

    #[error("AI gateway returned status {0}")]
    AiUpstream(u16),

    #[error("AI reply is not valid JSON: {0}")]
    InvalidAiResponse(String),
}

impl CoreError {
    pub fn is_table_missing(&self) -> bool {
        matches!(self, CoreError::TableMissing(_))
    }
}
