use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

use super::errors::TokenError;

/// Issuer written into every token.
pub const ISSUER: &str = "chirpy";

/// Registered claims carried by a session token.
///
/// Timestamps are Unix seconds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Issuer
    pub iss: String,

    /// Issued at
    pub iat: i64,

    /// Expiration time
    pub exp: i64,

    /// Subject (user identifier, hyphenated UUID)
    pub sub: String,
}

impl Claims {
    /// Build claims for `subject`, valid from `issued_at` for `ttl`.
    ///
    /// The expiry instant is computed at full precision, then both
    /// timestamps are truncated to whole seconds. A lifetime that runs past
    /// the representable range saturates.
    pub fn for_subject(subject: Uuid, issued_at: DateTime<Utc>, ttl: Duration) -> Self {
        let iat = issued_at.timestamp();
        let exp = issued_at
            .checked_add_signed(ttl)
            .map(|expires_at| expires_at.timestamp())
            .unwrap_or_else(|| iat.saturating_add(ttl.num_seconds()));

        Self {
            iss: ISSUER.to_string(),
            iat,
            exp,
            sub: subject.to_string(),
        }
    }

    /// A token is expired from its `exp` second onwards.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        current_timestamp >= self.exp
    }

    /// Parse the subject claim.
    ///
    /// # Errors
    /// * `MalformedSubject` - `sub` is not a UUID
    pub fn subject(&self) -> Result<Uuid, TokenError> {
        Uuid::parse_str(&self.sub).map_err(|e| TokenError::MalformedSubject(e.to_string()))
    }
}
