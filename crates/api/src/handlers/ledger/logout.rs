use axum::{
    extract::{Extension, State},
    http::StatusCode,
    Json,
};
use moneta_core::services::auth_service::LogoutService;
use moneta_core::{AppState, Claims};
use moneta_primitives::error::ApiError;
use moneta_primitives::models::LogoutResponse;
use std::sync::Arc;

pub async fn logout(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> Result<(StatusCode, Json<LogoutResponse>), ApiError> {
    LogoutService::logout(&state, claims).await?;

    Ok((
        StatusCode::OK,
        Json(LogoutResponse {
            message: "Logged out successfully".to_string(),
        }),
    ))
}
