use crate::handlers::OwnerQuery;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
};
use moneta_core::services::AdvisoryDeskService;
use moneta_core::AppState;
use moneta_primitives::error::ApiError;
use std::sync::Arc;
use uuid::Uuid;

pub async fn cancel_session(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<Uuid>,
    Query(scope): Query<OwnerQuery>,
) -> Result<StatusCode, ApiError> {
    AdvisoryDeskService::cancel_session(&state, scope.user_id, session_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
