use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// The store answered the item fetch with a non-success status.
    #[error("Item store read failed with status {status}")]
    UpstreamRead { status: u16 },

    /// The store rejected the like-count update.
    #[error("Item store update failed with status {status} - {body}")]
    UpstreamWrite { status: u16, body: String },

    /// No response from the store at all (connect error, timeout).
    #[error("Item store unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("Infrastructure error: {0}")]
    InfrastructureError(String),
}

impl From<validator::ValidationErrors> for DomainError {
    fn from(err: validator::ValidationErrors) -> Self {
        DomainError::ValidationError(err.to_string())
    }
}
