use axum::{extract::State, Json};
use moneta_core::services::AdvisoryDeskService;
use moneta_core::AppState;
use moneta_primitives::error::ApiError;
use moneta_primitives::models::AdvisorResponse;
use std::sync::Arc;

pub async fn list_advisors(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<AdvisorResponse>>, ApiError> {
    let advisors = AdvisoryDeskService::list_advisors(&state).await?;

    Ok(Json(
        advisors.into_iter().map(AdvisorResponse::from).collect(),
    ))
}
