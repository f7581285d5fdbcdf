use axum::{
    extract::{Extension, Json, State},
    http::StatusCode,
};
use moneta_core::services::TransactionService;
use moneta_core::{AppState, Claims};
use moneta_primitives::error::ApiError;
use moneta_primitives::models::{TransactionResponse, TransferRequest};
use std::sync::Arc;
use tracing::error;
use validator::Validate;

pub async fn transfer(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<TransferRequest>,
) -> Result<(StatusCode, Json<TransactionResponse>), ApiError> {
    payload.validate().map_err(|e| {
        error!("Validation error: {}", e);
        ApiError::Validation(e)
    })?;

    let caller = claims.user_id()?;

    let transaction = TransactionService::transfer(&state, caller, payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(TransactionResponse::from(transaction)),
    ))
}
