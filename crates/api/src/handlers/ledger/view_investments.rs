use axum::{
    extract::{Extension, State},
    Json,
};
use moneta_core::services::InvestmentService;
use moneta_core::{AppState, Claims};
use moneta_primitives::error::ApiError;
use moneta_primitives::models::InvestmentRecord;
use std::sync::Arc;

pub async fn view_investments(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<Vec<InvestmentRecord>>, ApiError> {
    let caller = claims.user_id()?;

    let records = InvestmentService::view_investments(&state, caller).await?;

    Ok(Json(records))
}
