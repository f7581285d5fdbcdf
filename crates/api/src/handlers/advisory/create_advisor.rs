use axum::{
    extract::{Json, State},
    http::StatusCode,
};
use moneta_core::services::AdvisoryDeskService;
use moneta_core::AppState;
use moneta_primitives::error::ApiError;
use moneta_primitives::models::{AdvisorResponse, CreateAdvisorRequest};
use std::sync::Arc;
use tracing::error;
use validator::Validate;

pub async fn create_advisor(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateAdvisorRequest>,
) -> Result<(StatusCode, Json<AdvisorResponse>), ApiError> {
    payload.validate().map_err(|e| {
        error!("Validation error: {}", e);
        ApiError::Validation(e)
    })?;

    let advisor = AdvisoryDeskService::create_advisor(&state, payload).await?;

    Ok((StatusCode::CREATED, Json(AdvisorResponse::from(advisor))))
}
