use axum::{
    extract::{Json, State},
    http::StatusCode,
};
use moneta_core::services::auth_service::RegisterService;
use moneta_core::AppState;
use moneta_primitives::error::ApiError;
use moneta_primitives::models::{RegisterRequest, RegisterResponse};
use std::sync::Arc;
use tracing::error;
use validator::Validate;

pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), ApiError> {
    let payload = payload.normalize();

    payload.validate().map_err(|e| {
        error!("Validation error: {}", e);
        ApiError::Validation(e)
    })?;

    let response = RegisterService::register(&state, payload).await?;

    Ok((StatusCode::CREATED, Json(response)))
}
