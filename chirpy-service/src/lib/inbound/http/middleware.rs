use axum::extract::Request;
use axum::extract::State;
use axum::middleware::Next;
use axum::response::Response;

use super::handlers::ApiError;
use crate::domain::user::models::UserId;
use crate::inbound::http::router::AppState;

/// Single message for every bearer or token rejection, so clients cannot
/// tell which check failed.
const UNAUTHORIZED_MESSAGE: &str = "Invalid or missing bearer token";

/// Extension type to store the authenticated user in request extensions
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
}

/// Middleware that validates the bearer token and records its subject
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = auth::bearer::extract_from_headers(req.headers()).map_err(|e| {
        tracing::warn!(reason = %e, "Bearer credential rejected");
        ApiError::Unauthorized(UNAUTHORIZED_MESSAGE.to_string())
    })?;

    let subject = state
        .token_codec
        .validate(token, state.jwt.secret.as_bytes())
        .map_err(|e| {
            tracing::warn!(kind = e.kind(), "JWT validation failed");
            ApiError::Unauthorized(UNAUTHORIZED_MESSAGE.to_string())
        })?;

    req.extensions_mut().insert(AuthenticatedUser {
        user_id: UserId(subject),
    });

    Ok(next.run(req).await)
}
