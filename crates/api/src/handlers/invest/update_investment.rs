use crate::handlers::OwnerQuery;
use axum::{
    extract::{Json, Path, Query, State},
    http::StatusCode,
};
use moneta_core::services::InvestmentDeskService;
use moneta_core::AppState;
use moneta_primitives::error::ApiError;
use moneta_primitives::models::{InvestmentRecord, UpdateInvestmentRequest};
use std::sync::Arc;
use tracing::error;
use uuid::Uuid;
use validator::Validate;

pub async fn update_investment(
    State(state): State<Arc<AppState>>,
    Path(investment_id): Path<Uuid>,
    Query(scope): Query<OwnerQuery>,
    Json(payload): Json<UpdateInvestmentRequest>,
) -> Result<(StatusCode, Json<InvestmentRecord>), ApiError> {
    payload.validate().map_err(|e| {
        error!("Validation error: {}", e);
        ApiError::Validation(e)
    })?;

    let investment =
        InvestmentDeskService::update(&state, scope.user_id, investment_id, payload).await?;

    Ok((StatusCode::OK, Json(InvestmentRecord::from(investment))))
}
