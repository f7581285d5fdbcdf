use crate::app_state::AppState;
use crate::repositories::investment_repository::InvestmentRepository;
use diesel::PgConnection;
use moneta_primitives::error::ApiError;
use moneta_primitives::models::dtos::investment_dto::{
    CreateInvestmentRequest, UpdateInvestmentRequest,
};
use moneta_primitives::models::entities::investment::{Investment, NewInvestment};
use tracing::{error, info};
use uuid::Uuid;

/// Owns the investments table. Creation re-verifies funds against the
/// ledger's public balance check before writing; it does not debit — the
/// coordinator on the ledger side does that afterwards.
pub struct InvestmentDeskService;

impl InvestmentDeskService {
    pub async fn create(
        state: &AppState,
        payload: CreateInvestmentRequest,
    ) -> Result<Investment, ApiError> {
        let balance = state
            .ledger
            .check_balance(payload.account_id, payload.amount_cents)
            .await?;

        if !balance.sufficient {
            return Err(ApiError::InsufficientFunds {
                balance_cents: balance.balance_cents,
                requested_cents: payload.amount_cents,
            });
        }

        let mut conn = state.db.get().map_err(|e| {
            error!("desk.create: failed to acquire db connection: {}", e);
            ApiError::DatabaseConnection("Database unavailable".into())
        })?;

        let investment = InvestmentRepository::create(
            &mut conn,
            NewInvestment {
                user_id: payload.user_id,
                investment_type: payload.investment_type,
                amount_cents: payload.amount_cents,
            },
        )?;

        info!(
            investment_id = %investment.id,
            user_id = %investment.user_id,
            amount_cents = investment.amount_cents,
            "Investment record created"
        );

        Ok(investment)
    }

    pub async fn list(state: &AppState, user_id: Uuid) -> Result<Vec<Investment>, ApiError> {
        let mut conn = state.db.get().map_err(|e| {
            error!("desk.list: failed to acquire db connection: {}", e);
            ApiError::DatabaseConnection("Database unavailable".into())
        })?;

        InvestmentRepository::find_all_by_user(&mut conn, user_id)
    }

    pub async fn update(
        state: &AppState,
        user_id: Uuid,
        investment_id: Uuid,
        payload: UpdateInvestmentRequest,
    ) -> Result<Investment, ApiError> {
        let mut conn = state.db.get().map_err(|e| {
            error!("desk.update: failed to acquire db connection: {}", e);
            ApiError::DatabaseConnection("Database unavailable".into())
        })?;

        let existing = Self::resolve_owned(&mut conn, investment_id, user_id)?;

        // Absent fields keep their stored values.
        let investment = InvestmentRepository::update(
            &mut conn,
            investment_id,
            payload.investment_type.unwrap_or(existing.investment_type),
            payload.amount_cents.unwrap_or(existing.amount_cents),
        )?;

        Ok(investment)
    }

    pub async fn delete(
        state: &AppState,
        user_id: Uuid,
        investment_id: Uuid,
    ) -> Result<(), ApiError> {
        let mut conn = state.db.get().map_err(|e| {
            error!("desk.delete: failed to acquire db connection: {}", e);
            ApiError::DatabaseConnection("Database unavailable".into())
        })?;

        Self::resolve_owned(&mut conn, investment_id, user_id)?;

        InvestmentRepository::delete(&mut conn, investment_id)?;

        info!(investment_id = %investment_id, user_id = %user_id, "Investment record deleted");

        Ok(())
    }

    fn resolve_owned(
        conn: &mut PgConnection,
        investment_id: Uuid,
        user_id: Uuid,
    ) -> Result<Investment, ApiError> {
        let investment = InvestmentRepository::find_by_id(conn, investment_id)?
            .ok_or_else(|| ApiError::NotFound("Investment".into()))?;

        if investment.user_id != user_id {
            return Err(ApiError::Unauthorized(
                "Investment does not belong to the caller".into(),
            ));
        }

        Ok(investment)
    }
}
