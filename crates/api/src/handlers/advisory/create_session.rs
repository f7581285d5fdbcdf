use axum::{
    extract::{Json, State},
    http::StatusCode,
};
use moneta_core::services::AdvisoryDeskService;
use moneta_core::AppState;
use moneta_primitives::error::ApiError;
use moneta_primitives::models::{CreateSessionRequest, SessionRecord};
use std::sync::Arc;

pub async fn create_session(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateSessionRequest>,
) -> Result<(StatusCode, Json<SessionRecord>), ApiError> {
    let session = AdvisoryDeskService::create_session(&state, payload).await?;

    Ok((StatusCode::CREATED, Json(SessionRecord::from(session))))
}
