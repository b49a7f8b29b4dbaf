use thiserror::Error;

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("name must be unique: {0}")]
    DuplicateName(String),
    #[error("malformatted id: {0}")]
    MalformedId(String),
    #[error("{0}")]
    Validation(String),
    #[error("operation not supported by this store: {0}")]
    Unsupported(&'static str),
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
    #[error("storage operation timed out: {0}")]
    Timeout(String),
    #[error("storage query failed: {0}")]
    Query(String),
    #[error("stored data is invalid: {0}")]
    InvalidData(String),
}
