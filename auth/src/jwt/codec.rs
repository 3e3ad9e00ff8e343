use chrono::Duration;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;
use uuid::Uuid;

use super::claims::Claims;
use super::clock::Clock;
use super::clock::SystemClock;
use super::errors::TokenError;

/// Issues and validates signed session tokens.
///
/// Tokens are compact JWS strings signed with HS256. The signing secret is
/// passed on every call; the codec only owns the clock it reads.
#[derive(Debug, Clone, Default)]
pub struct TokenCodec<C = SystemClock> {
    clock: C,
}

impl TokenCodec {
    /// Create a codec reading the system clock.
    pub fn new() -> Self {
        Self { clock: SystemClock }
    }
}

impl<C: Clock> TokenCodec<C> {
    /// Create a codec reading the given clock.
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    /// Issue a token for `subject` that expires `ttl` from now.
    ///
    /// # Arguments
    /// * `subject` - User identifier stored in the `sub` claim
    /// * `secret` - HMAC signing secret
    /// * `ttl` - Time to live, truncated to whole seconds
    ///
    /// # Errors
    /// * `EncodingFailed` - Claims could not be serialized or signed
    pub fn issue(&self, subject: Uuid, secret: &[u8], ttl: Duration) -> Result<String, TokenError> {
        let claims = Claims::for_subject(subject, self.clock.now(), ttl);

        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(secret),
        )
        .map_err(|e| TokenError::EncodingFailed(e.to_string()))?;

        tracing::debug!(
            subject = %subject,
            issued_at = claims.iat,
            expires_at = claims.exp,
            "Token issued"
        );

        Ok(token)
    }

    /// Validate a token and recover its subject.
    ///
    /// Checks run in order: structure and signature, expiry, subject.
    ///
    /// # Errors
    /// * `Malformed` - Token is not a well-formed HS256 JWS with the expected claims
    /// * `Signature` - Signature does not match `secret`
    /// * `Expired` - Current time is at or after `exp`
    /// * `MalformedSubject` - `sub` is not a UUID
    pub fn validate(&self, token: &str, secret: &[u8]) -> Result<Uuid, TokenError> {
        let result = self.decode_claims(token, secret).and_then(|claims| {
            if claims.is_expired(self.clock.now().timestamp()) {
                return Err(TokenError::Expired);
            }
            claims.subject()
        });

        if let Err(e) = &result {
            tracing::debug!(kind = e.kind(), "Token rejected");
        }

        result
    }

    fn decode_claims(&self, token: &str, secret: &[u8]) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked against our own clock, without leeway.
        validation.validate_exp = false;
        validation.leeway = 0;

        decode::<Claims>(token, &DecodingKey::from_secret(secret), &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature => TokenError::Signature,
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Malformed(e.to_string()),
            })
    }
}
