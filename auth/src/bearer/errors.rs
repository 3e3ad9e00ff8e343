use thiserror::Error;

/// Error type for bearer credential extraction.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum BearerError {
    #[error("Missing Authorization header")]
    MissingHeader,

    #[error("Authorization header is not a Bearer credential")]
    MissingScheme,
}
