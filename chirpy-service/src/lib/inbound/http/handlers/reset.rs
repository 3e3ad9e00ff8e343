use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::config::Platform;
use crate::inbound::http::router::AppState;

pub async fn reset(
    State(state): State<AppState>,
) -> Result<ApiSuccess<ResetResponseData>, ApiError> {
    if state.platform != Platform::Dev {
        return Err(ApiError::Forbidden(
            "Reset is only allowed in dev environment".to_string(),
        ));
    }

    let removed_users = state.user_service.reset().await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        ResetResponseData { removed_users },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResetResponseData {
    pub removed_users: u64,
}
