use axum::extract::State;
use axum::http::StatusCode;

use super::get_chirp::ChirpData;
use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn list_chirps(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<ChirpData>>, ApiError> {
    let chirps = state.chirp_service.list_chirps().await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        chirps.iter().map(ChirpData::from).collect(),
    ))
}
