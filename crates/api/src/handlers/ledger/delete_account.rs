use axum::{
    extract::{Extension, Path, State},
    http::StatusCode,
};
use moneta_core::services::AccountService;
use moneta_core::{AppState, Claims};
use moneta_primitives::error::ApiError;
use std::sync::Arc;
use uuid::Uuid;

pub async fn delete_account(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Path(account_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let caller = claims.user_id()?;

    AccountService::delete_account(&state, caller, account_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
