use thiserror::Error;

use crate::bearer::BearerError;
use crate::jwt::TokenError;
use crate::password::PasswordError;

/// Any failure raised by the auth primitives.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Password error: {0}")]
    Password(#[from] PasswordError),

    #[error("Token error: {0}")]
    Token(#[from] TokenError),

    #[error("Bearer error: {0}")]
    Bearer(#[from] BearerError),
}

impl AuthError {
    /// True when the failure is on the server side rather than a rejected credential.
    pub fn is_server_fault(&self) -> bool {
        matches!(
            self,
            AuthError::Password(PasswordError::HashingFailed(_))
                | AuthError::Password(PasswordError::InvalidParams(_))
                | AuthError::Token(TokenError::EncodingFailed(_))
        )
    }
}
