use axum::{
    extract::{Extension, Path, State},
    http::StatusCode,
};
use moneta_core::services::InvestmentService;
use moneta_core::{AppState, Claims};
use moneta_primitives::error::ApiError;
use std::sync::Arc;
use uuid::Uuid;

pub async fn delete_investment(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Path(investment_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let caller = claims.user_id()?;

    InvestmentService::delete_investment(&state, caller, investment_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
