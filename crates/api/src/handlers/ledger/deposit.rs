use axum::{
    extract::{Extension, Json, State},
    http::StatusCode,
};
use moneta_core::services::TransactionService;
use moneta_core::{AppState, Claims};
use moneta_primitives::error::ApiError;
use moneta_primitives::models::{DepositRequest, TransactionResponse};
use std::sync::Arc;
use tracing::error;
use validator::Validate;

pub async fn deposit(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<DepositRequest>,
) -> Result<(StatusCode, Json<TransactionResponse>), ApiError> {
    payload.validate().map_err(|e| {
        error!("Validation error: {}", e);
        ApiError::Validation(e)
    })?;

    let caller = claims.user_id()?;

    let transaction = TransactionService::deposit(&state, caller, payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(TransactionResponse::from(transaction)),
    ))
}
