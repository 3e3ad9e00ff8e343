use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::create_user::UserData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::LoginCommand;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    // An address that cannot exist is reported like any other unknown account.
    let email = EmailAddress::new(body.email)
        .map_err(|_| ApiError::from(UserError::InvalidCredentials))?;

    let user = state
        .user_service
        .authenticate(LoginCommand::new(email, body.password))
        .await?;

    let ttl = state.jwt.token_ttl(body.expires_in_seconds);
    let token = state
        .token_codec
        .issue(user.id.into_uuid(), state.jwt.secret.as_bytes(), ttl)
        .map_err(|e| ApiError::InternalServerError(format!("Token generation failed: {}", e)))?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        LoginResponseData {
            user: (&user).into(),
            token,
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequest {
    email: String,
    password: String,
    #[serde(default)]
    expires_in_seconds: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub user: UserData,
    pub token: String,
}
