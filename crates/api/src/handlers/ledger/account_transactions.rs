use axum::{
    extract::{Extension, Path, State},
    Json,
};
use moneta_core::services::TransactionService;
use moneta_core::{AppState, Claims};
use moneta_primitives::error::ApiError;
use moneta_primitives::models::{TransactionResponse, TransactionsResponse};
use std::sync::Arc;
use uuid::Uuid;

pub async fn account_transactions(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Path(account_id): Path<Uuid>,
) -> Result<Json<TransactionsResponse>, ApiError> {
    let caller = claims.user_id()?;

    let transactions = TransactionService::list_for_account(&state, caller, account_id).await?;

    Ok(Json(TransactionsResponse {
        transactions: transactions
            .into_iter()
            .map(TransactionResponse::from)
            .collect(),
    }))
}
