use axum::{
    extract::{Json, State},
    http::StatusCode,
};
use moneta_core::services::auth_service::LoginService;
use moneta_core::AppState;
use moneta_primitives::error::ApiError;
use moneta_primitives::models::{LoginRequest, LoginResponse};
use std::sync::Arc;
use tracing::error;
use validator::Validate;

pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LoginRequest>,
) -> Result<(StatusCode, Json<LoginResponse>), ApiError> {
    let payload = payload.normalize();

    payload.validate().map_err(|e| {
        error!("Validation error: {}", e);
        ApiError::Validation(e)
    })?;

    let response = LoginService::login(&state, payload).await?;

    Ok((StatusCode::OK, Json(response)))
}
