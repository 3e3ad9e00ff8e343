use thiserror::Error;

/// Error type for token operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token signature is invalid")]
    Signature,

    #[error("Token is expired")]
    Expired,

    #[error("Token is malformed: {0}")]
    Malformed(String),

    #[error("Token subject is not a valid identifier: {0}")]
    MalformedSubject(String),
}

impl TokenError {
    /// Short, stable name of the failure kind, suitable for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            TokenError::EncodingFailed(_) => "encoding_failed",
            TokenError::Signature => "signature",
            TokenError::Expired => "expired",
            TokenError::Malformed(_) => "malformed",
            TokenError::MalformedSubject(_) => "malformed_subject",
        }
    }
}
