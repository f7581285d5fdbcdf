use crate::handlers::OwnerQuery;
use axum::{
    extract::{Query, State},
    Json,
};
use moneta_core::services::InvestmentDeskService;
use moneta_core::AppState;
use moneta_primitives::error::ApiError;
use moneta_primitives::models::InvestmentRecord;
use std::sync::Arc;

pub async fn list_investments(
    State(state): State<Arc<AppState>>,
    Query(scope): Query<OwnerQuery>,
) -> Result<Json<Vec<InvestmentRecord>>, ApiError> {
    let investments = InvestmentDeskService::list(&state, scope.user_id).await?;

    Ok(Json(
        investments.into_iter().map(InvestmentRecord::from).collect(),
    ))
}
