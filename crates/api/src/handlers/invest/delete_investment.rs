use crate::handlers::OwnerQuery;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
};
use moneta_core::services::InvestmentDeskService;
use moneta_core::AppState;
use moneta_primitives::error::ApiError;
use std::sync::Arc;
use uuid::Uuid;

pub async fn delete_investment(
    State(state): State<Arc<AppState>>,
    Path(investment_id): Path<Uuid>,
    Query(scope): Query<OwnerQuery>,
) -> Result<StatusCode, ApiError> {
    InvestmentDeskService::delete(&state, scope.user_id, investment_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
