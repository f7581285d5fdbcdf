use axum::{
    extract::{Extension, Json, Path, State},
    http::StatusCode,
};
use moneta_core::services::AdvisoryService;
use moneta_core::{AppState, Claims};
use moneta_primitives::error::ApiError;
use moneta_primitives::models::{RescheduleSessionRequest, SessionRecord};
use std::sync::Arc;
use uuid::Uuid;

pub async fn reschedule_advisory(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Path(session_id): Path<Uuid>,
    Json(payload): Json<RescheduleSessionRequest>,
) -> Result<(StatusCode, Json<SessionRecord>), ApiError> {
    let caller = claims.user_id()?;

    let record = AdvisoryService::reschedule(&state, caller, session_id, payload).await?;

    Ok((StatusCode::OK, Json(record)))
}
