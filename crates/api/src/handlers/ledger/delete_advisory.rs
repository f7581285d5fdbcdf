use axum::{
    extract::{Extension, Path, State},
    http::StatusCode,
};
use moneta_core::services::AdvisoryService;
use moneta_core::{AppState, Claims};
use moneta_primitives::error::ApiError;
use std::sync::Arc;
use uuid::Uuid;

pub async fn delete_advisory(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Path(session_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let caller = claims.user_id()?;

    AdvisoryService::cancel(&state, caller, session_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
