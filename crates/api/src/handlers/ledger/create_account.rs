use axum::{
    extract::{Extension, Json, State},
    http::StatusCode,
};
use moneta_core::services::AccountService;
use moneta_core::{AppState, Claims};
use moneta_primitives::error::ApiError;
use moneta_primitives::models::{AccountResponse, CreateAccountRequest};
use std::sync::Arc;

pub async fn create_account(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<CreateAccountRequest>,
) -> Result<(StatusCode, Json<AccountResponse>), ApiError> {
    let caller = claims.user_id()?;

    let account = AccountService::create_account(&state, caller, payload).await?;

    Ok((StatusCode::CREATED, Json(AccountResponse::from(account))))
}
