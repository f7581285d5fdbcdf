use axum::{
    extract::{Json, State},
    http::StatusCode,
};
use moneta_core::services::InvestmentDeskService;
use moneta_core::AppState;
use moneta_primitives::error::ApiError;
use moneta_primitives::models::{CreateInvestmentRequest, InvestmentRecord};
use std::sync::Arc;
use tracing::error;
use validator::Validate;

pub async fn create_investment(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateInvestmentRequest>,
) -> Result<(StatusCode, Json<InvestmentRecord>), ApiError> {
    payload.validate().map_err(|e| {
        error!("Validation error: {}", e);
        ApiError::Validation(e)
    })?;

    let investment = InvestmentDeskService::create(&state, payload).await?;

    Ok((StatusCode::CREATED, Json(InvestmentRecord::from(investment))))
}
