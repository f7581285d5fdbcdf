use axum::{
    extract::{Extension, Json, Path, State},
    http::StatusCode,
};
use moneta_core::services::AccountService;
use moneta_core::{AppState, Claims};
use moneta_primitives::error::ApiError;
use moneta_primitives::models::{AccountResponse, UpdateAccountRequest};
use std::sync::Arc;
use uuid::Uuid;

pub async fn update_account(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Path(account_id): Path<Uuid>,
    Json(payload): Json<UpdateAccountRequest>,
) -> Result<(StatusCode, Json<AccountResponse>), ApiError> {
    let caller = claims.user_id()?;

    let account = AccountService::update_account(&state, caller, account_id, payload).await?;

    Ok((StatusCode::OK, Json(AccountResponse::from(account))))
}
