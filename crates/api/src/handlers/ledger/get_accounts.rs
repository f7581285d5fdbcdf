use axum::{
    extract::{Extension, State},
    Json,
};
use moneta_core::services::AccountService;
use moneta_core::{AppState, Claims};
use moneta_primitives::error::ApiError;
use moneta_primitives::models::AccountResponse;
use std::sync::Arc;

pub async fn get_accounts(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<Vec<AccountResponse>>, ApiError> {
    let caller = claims.user_id()?;

    let accounts = AccountService::list_accounts(&state, caller).await?;

    Ok(Json(
        accounts.into_iter().map(AccountResponse::from).collect(),
    ))
}
