use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::get_chirp::ChirpData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::chirp::models::ChirpBody;
use crate::domain::chirp::models::CreateChirpCommand;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

/// Publish a chirp as the user named by the bearer token.
pub async fn create_chirp(
    State(state): State<AppState>,
    Extension(author): Extension<AuthenticatedUser>,
    Json(body): Json<CreateChirpRequest>,
) -> Result<ApiSuccess<ChirpData>, ApiError> {
    let body = ChirpBody::new(body.body).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .chirp_service
        .create_chirp(CreateChirpCommand::new(body, author.user_id))
        .await
        .map_err(ApiError::from)
        .map(|ref chirp| ApiSuccess::new(StatusCode::CREATED, chirp.into()))
}

/// HTTP request body for a new chirp (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateChirpRequest {
    body: String,
}
