use axum::{
    extract::{Extension, Json, State},
    http::StatusCode,
};
use moneta_core::services::InvestmentService;
use moneta_core::{AppState, Claims};
use moneta_primitives::error::ApiError;
use moneta_primitives::models::{InvestmentRecord, InvestmentRequest};
use std::sync::Arc;
use tracing::error;
use validator::Validate;

pub async fn to_invest(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<InvestmentRequest>,
) -> Result<(StatusCode, Json<InvestmentRecord>), ApiError> {
    payload.validate().map_err(|e| {
        error!("Validation error: {}", e);
        ApiError::Validation(e)
    })?;

    let caller = claims.user_id()?;

    let record = InvestmentService::to_invest(&state, caller, payload).await?;

    Ok((StatusCode::CREATED, Json(record)))
}
