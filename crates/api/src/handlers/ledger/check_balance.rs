use axum::extract::{Json, State};
use moneta_core::services::TransactionService;
use moneta_core::AppState;
use moneta_primitives::error::ApiError;
use moneta_primitives::models::{BalanceCheckRequest, BalanceCheckResponse};
use std::sync::Arc;

/// Public sufficiency probe used by the investment desk. No authentication
/// and no ownership check: anyone holding an account id can ask.
pub async fn check_balance(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<BalanceCheckRequest>,
) -> Result<Json<BalanceCheckResponse>, ApiError> {
    let response =
        TransactionService::check_balance(&state, payload.account_id, payload.amount_cents).await?;

    Ok(Json(response))
}
