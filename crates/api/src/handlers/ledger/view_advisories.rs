use axum::{
    extract::{Extension, State},
    Json,
};
use moneta_core::services::AdvisoryService;
use moneta_core::{AppState, Claims};
use moneta_primitives::error::ApiError;
use moneta_primitives::models::SessionRecord;
use std::sync::Arc;

pub async fn view_advisories(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<Vec<SessionRecord>>, ApiError> {
    let caller = claims.user_id()?;

    let records = AdvisoryService::view_sessions(&state, caller).await?;

    Ok(Json(records))
}
