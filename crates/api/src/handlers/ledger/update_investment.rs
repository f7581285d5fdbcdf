use axum::{
    extract::{Extension, Json, Path, State},
    http::StatusCode,
};
use moneta_core::services::InvestmentService;
use moneta_core::{AppState, Claims};
use moneta_primitives::error::ApiError;
use moneta_primitives::models::{InvestmentRecord, UpdateInvestmentRequest};
use std::sync::Arc;
use tracing::error;
use uuid::Uuid;
use validator::Validate;

pub async fn update_investment(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Path(investment_id): Path<Uuid>,
    Json(payload): Json<UpdateInvestmentRequest>,
) -> Result<(StatusCode, Json<InvestmentRecord>), ApiError> {
    payload.validate().map_err(|e| {
        error!("Validation error: {}", e);
        ApiError::Validation(e)
    })?;

    let caller = claims.user_id()?;

    let record =
        InvestmentService::update_investment(&state, caller, investment_id, payload).await?;

    Ok((StatusCode::OK, Json(record)))
}
