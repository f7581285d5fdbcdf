use axum::{
    extract::{Extension, Json, State},
    http::StatusCode,
};
use moneta_core::services::AdvisoryService;
use moneta_core::{AppState, Claims};
use moneta_primitives::error::ApiError;
use moneta_primitives::models::{BookAdvisoryRequest, SessionRecord};
use std::sync::Arc;

pub async fn book_advisory(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<BookAdvisoryRequest>,
) -> Result<(StatusCode, Json<SessionRecord>), ApiError> {
    let caller = claims.user_id()?;

    let record = AdvisoryService::book(&state, caller, payload).await?;

    Ok((StatusCode::CREATED, Json(record)))
}
