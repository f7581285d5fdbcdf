use crate::handlers::OwnerQuery;
use axum::{
    extract::{Json, Path, Query, State},
    http::StatusCode,
};
use moneta_core::services::AdvisoryDeskService;
use moneta_core::AppState;
use moneta_primitives::error::ApiError;
use moneta_primitives::models::{RescheduleSessionRequest, SessionRecord};
use std::sync::Arc;
use uuid::Uuid;

pub async fn reschedule_session(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<Uuid>,
    Query(scope): Query<OwnerQuery>,
    Json(payload): Json<RescheduleSessionRequest>,
) -> Result<(StatusCode, Json<SessionRecord>), ApiError> {
    let session =
        AdvisoryDeskService::reschedule_session(&state, scope.user_id, session_id, payload).await?;

    Ok((StatusCode::OK, Json(SessionRecord::from(session))))
}
