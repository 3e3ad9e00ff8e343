use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::chirp::errors::ChirpBodyError;
use crate::domain::chirp::errors::ChirpIdError;
use crate::domain::chirp::moderation;
use crate::domain::user::models::UserId;

/// A short post written by a user.
#[derive(Debug, Clone)]
pub struct Chirp {
    pub id: ChirpId,
    pub body: ChirpBody,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Chirp unique identifier value object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChirpId(pub Uuid);

impl ChirpId {
    /// Generate a new random chirp ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a chirp ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, ChirpIdError> {
        Uuid::parse_str(s)
            .map(ChirpId)
            .map_err(|e| ChirpIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for ChirpId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ChirpId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Moderated chirp text.
///
/// At most 140 characters; banned words are masked on construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChirpBody(String);

impl ChirpBody {
    pub const MAX_LENGTH: usize = 140;

    /// Validate and moderate a raw body.
    ///
    /// # Errors
    /// * `TooLong` - Body exceeds 140 characters
    pub fn new(body: String) -> Result<Self, ChirpBodyError> {
        let length = body.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(ChirpBodyError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }

        Ok(Self(moderation::clean(&body)))
    }

    /// Wrap a body that was already validated and moderated when stored.
    pub fn from_stored(body: String) -> Self {
        Self(body)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Command to publish a chirp on behalf of an authenticated user
#[derive(Debug)]
pub struct CreateChirpCommand {
    pub body: ChirpBody,
    pub user_id: UserId,
}

impl CreateChirpCommand {
    pub fn new(body: ChirpBody, user_id: UserId) -> Self {
        Self { body, user_id }
    }
}
