use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use moneta_core::services::AdvisoryDeskService;
use moneta_core::AppState;
use moneta_primitives::error::ApiError;
use std::sync::Arc;
use uuid::Uuid;

/// Removes an advisor without touching their booked sessions. Any session
/// still referencing the advisor keeps its dangling `advisor_id`.
pub async fn delete_advisor(
    State(state): State<Arc<AppState>>,
    Path(advisor_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    AdvisoryDeskService::delete_advisor(&state, advisor_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
