use thiserror::Error;

/// Error taxonomy of the order domain. Every operation returns these as
/// typed results; nothing is retried or swallowed inside the core.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid input: {0}")]
    Validation(String),
    #[error("{0}")]
    Forbidden(String),
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("{0}")]
    InvalidTransition(String),
    #[error("Storage error: {0}")]
    Persistence(String),
}
