use crate::app_state::AppState;
use crate::services::account_service::AccountService;
use crate::services::notification_service::NotificationService;
use crate::services::transaction_service::TransactionService;
use moneta_primitives::error::ApiError;
use moneta_primitives::events::EventChannel;
use moneta_primitives::models::dtos::investment_dto::{
    CreateInvestmentRequest, InvestmentRecord, InvestmentRequest, UpdateInvestmentRequest,
};
use moneta_primitives::models::dtos::transaction_dto::WithdrawRequest;
use tracing::{error, info};
use uuid::Uuid;

/// Sequences one investment attempt across the two services: verify funds
/// locally, create the record remotely, then debit the funding account
/// locally. The remote create and the local debit are independent calls
/// with nothing tying them together.
pub struct InvestmentService;

impl InvestmentService {
    pub async fn to_invest(
        state: &AppState,
        caller: Uuid,
        payload: InvestmentRequest,
    ) -> Result<InvestmentRecord, ApiError> {
        {
            let mut conn = state.db.get().map_err(|e| {
                error!("invest.to_invest: failed to acquire db connection: {}", e);
                ApiError::DatabaseConnection("Database unavailable".into())
            })?;

            let account = AccountService::resolve_owned(&mut conn, payload.account_id, caller)?;

            if account.balance_cents < payload.amount_cents {
                return Err(ApiError::InsufficientFunds {
                    balance_cents: account.balance_cents,
                    requested_cents: payload.amount_cents,
                });
            }
        }

        let record = state
            .invest
            .create(&CreateInvestmentRequest {
                user_id: caller,
                account_id: payload.account_id,
                investment_type: payload.investment_type,
                amount_cents: payload.amount_cents,
            })
            .await?;

        // The remote row exists from here on. A failing debit is reported
        // to the caller as-is; nothing deletes the remote record and
        // nothing retries the debit.
        TransactionService::withdraw(
            state,
            caller,
            WithdrawRequest {
                account_id: payload.account_id,
                amount_cents: payload.amount_cents,
            },
        )
        .await?;

        info!(
            investment_id = %record.id,
            user_id = %caller,
            amount_cents = payload.amount_cents,
            "Investment completed"
        );

        NotificationService::dispatch(
            state,
            EventChannel::Investment,
            caller,
            format!(
                "Investment of {} cents in {} recorded",
                record.amount_cents, record.investment_type
            ),
        );

        Ok(record)
    }

    pub async fn view_investments(
        state: &AppState,
        caller: Uuid,
    ) -> Result<Vec<InvestmentRecord>, ApiError> {
        state.invest.list_for_user(caller).await
    }

    pub async fn update_investment(
        state: &AppState,
        caller: Uuid,
        investment_id: Uuid,
        payload: UpdateInvestmentRequest,
    ) -> Result<InvestmentRecord, ApiError> {
        let record = state.invest.update(investment_id, caller, &payload).await?;

        NotificationService::dispatch(
            state,
            EventChannel::Investment,
            caller,
            format!("Investment {} updated", record.id),
        );

        Ok(record)
    }

    pub async fn delete_investment(
        state: &AppState,
        caller: Uuid,
        investment_id: Uuid,
    ) -> Result<(), ApiError> {
        state.invest.delete(investment_id, caller).await?;

        NotificationService::dispatch(
            state,
            EventChannel::Investment,
            caller,
            format!("Investment {} deleted", investment_id),
        );

        Ok(())
    }
}
