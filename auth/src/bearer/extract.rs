use http::header::AUTHORIZATION;
use http::HeaderMap;

use super::errors::BearerError;

/// Scheme token and separator expected at the start of the header value.
pub const SCHEME_PREFIX: &str = "Bearer ";

/// Extract the raw token from an `Authorization` header value.
///
/// The prefix match is case-sensitive and requires exactly one space. The
/// remainder is returned as-is, without trimming.
///
/// # Errors
/// * `MissingHeader` - Value is absent or empty
/// * `MissingScheme` - Value does not start with `"Bearer "`
pub fn extract(header_value: Option<&str>) -> Result<&str, BearerError> {
    let value = match header_value {
        Some(value) if !value.is_empty() => value,
        _ => return Err(BearerError::MissingHeader),
    };

    value
        .strip_prefix(SCHEME_PREFIX)
        .ok_or(BearerError::MissingScheme)
}

/// Extract the raw token from a request's headers.
///
/// Only the first `Authorization` value is considered. A value that is not
/// visible ASCII cannot carry the scheme and is rejected as `MissingScheme`.
pub fn extract_from_headers(headers: &HeaderMap) -> Result<&str, BearerError> {
    let Some(value) = headers.get(AUTHORIZATION) else {
        return Err(BearerError::MissingHeader);
    };

    let value = value.to_str().map_err(|_| BearerError::MissingScheme)?;
    extract(Some(value))
}
