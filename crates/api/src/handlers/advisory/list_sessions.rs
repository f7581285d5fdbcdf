use crate::handlers::OwnerQuery;
use axum::{
    extract::{Query, State},
    Json,
};
use moneta_core::services::AdvisoryDeskService;
use moneta_core::AppState;
use moneta_primitives::error::ApiError;
use moneta_primitives::models::SessionRecord;
use std::sync::Arc;

pub async fn list_sessions(
    State(state): State<Arc<AppState>>,
    Query(scope): Query<OwnerQuery>,
) -> Result<Json<Vec<SessionRecord>>, ApiError> {
    let sessions = AdvisoryDeskService::list_sessions(&state, scope.user_id).await?;

    Ok(Json(
        sessions.into_iter().map(SessionRecord::from).collect(),
    ))
}
