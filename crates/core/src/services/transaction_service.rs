use crate::app_state::AppState;
use crate::repositories::account_repository::AccountRepository;
use crate::repositories::transaction_repository::TransactionRepository;
use crate::services::account_service::AccountService;
use crate::services::notification_service::NotificationService;
use moneta_primitives::error::ApiError;
use moneta_primitives::events::EventChannel;
use moneta_primitives::models::dtos::transaction_dto::{
    BalanceCheckResponse, DepositRequest, TransferRequest, WithdrawRequest,
};
use moneta_primitives::models::entities::enum_types::TransactionKind;
use moneta_primitives::models::entities::transaction::{NewTransaction, Transaction};
use tracing::{error, info};
use uuid::Uuid;

pub struct TransactionService;

impl TransactionService {
    pub async fn deposit(
        state: &AppState,
        caller: Uuid,
        payload: DepositRequest,
    ) -> Result<Transaction, ApiError> {
        let mut conn = state.db.get().map_err(|e| {
            error!("transactions.deposit: failed to acquire db connection: {}", e);
            ApiError::DatabaseConnection("Database unavailable".into())
        })?;

        AccountService::resolve_owned(&mut conn, payload.account_id, caller)?;

        // Credit and append run as two independent statements.
        let account = AccountRepository::credit(&mut conn, payload.account_id, payload.amount_cents)?;

        let tx = TransactionRepository::append(
            &mut conn,
            NewTransaction {
                account_id: payload.account_id,
                kind: TransactionKind::Deposit,
                amount_cents: payload.amount_cents,
            },
        )?;

        drop(conn);

        info!(
            account_id = %account.id,
            amount_cents = payload.amount_cents,
            balance_cents = account.balance_cents,
            "Deposit recorded"
        );

        NotificationService::dispatch(
            state,
            EventChannel::Transaction,
            caller,
            format!(
                "Deposit of {} cents to account {}",
                payload.amount_cents, account.id
            ),
        );

        Ok(tx)
    }

    /// Withdrawals are not checked against the balance; the account may go
    /// negative.
    pub async fn withdraw(
        state: &AppState,
        caller: Uuid,
        payload: WithdrawRequest,
    ) -> Result<Transaction, ApiError> {
        let mut conn = state.db.get().map_err(|e| {
            error!("transactions.withdraw: failed to acquire db connection: {}", e);
            ApiError::DatabaseConnection("Database unavailable".into())
        })?;

        AccountService::resolve_owned(&mut conn, payload.account_id, caller)?;

        let account = AccountRepository::debit(&mut conn, payload.account_id, payload.amount_cents)?;

        let tx = TransactionRepository::append(
            &mut conn,
            NewTransaction {
                account_id: payload.account_id,
                kind: TransactionKind::Withdrawal,
                amount_cents: payload.amount_cents,
            },
        )?;

        drop(conn);

        info!(
            account_id = %account.id,
            amount_cents = payload.amount_cents,
            balance_cents = account.balance_cents,
            "Withdrawal recorded"
        );

        NotificationService::dispatch(
            state,
            EventChannel::Transaction,
            caller,
            format!(
                "Withdrawal of {} cents from account {}",
                payload.amount_cents, account.id
            ),
        );

        Ok(tx)
    }

    /// Debits the source, credits the destination and appends a single
    /// TRANSFER row against the source. The three statements share no
    /// database transaction: a crash between them leaves the books
    /// inconsistent.
    pub async fn transfer(
        state: &AppState,
        caller: Uuid,
        payload: TransferRequest,
    ) -> Result<Transaction, ApiError> {
        let mut conn = state.db.get().map_err(|e| {
            error!("transactions.transfer: failed to acquire db connection: {}", e);
            ApiError::DatabaseConnection("Database unavailable".into())
        })?;

        // Ownership applies to the source only; any existing account can
        // receive.
        AccountService::resolve_owned(&mut conn, payload.from_account_id, caller)?;

        AccountRepository::find_by_id(&mut conn, payload.to_account_id)?
            .ok_or_else(|| ApiError::NotFound("Destination account".into()))?;

        AccountRepository::debit(&mut conn, payload.from_account_id, payload.amount_cents)?;
        AccountRepository::credit(&mut conn, payload.to_account_id, payload.amount_cents)?;

        let tx = TransactionRepository::append(
            &mut conn,
            NewTransaction {
                account_id: payload.from_account_id,
                kind: TransactionKind::Transfer,
                amount_cents: payload.amount_cents,
            },
        )?;

        drop(conn);

        info!(
            from_account_id = %payload.from_account_id,
            to_account_id = %payload.to_account_id,
            amount_cents = payload.amount_cents,
            "Transfer recorded"
        );

        NotificationService::dispatch(
            state,
            EventChannel::Transaction,
            caller,
            format!(
                "Transfer of {} cents from account {} to account {}",
                payload.amount_cents, payload.from_account_id, payload.to_account_id
            ),
        );

        Ok(tx)
    }

    /// Public sufficiency probe: no authentication, no ownership check.
    pub async fn check_balance(
        state: &AppState,
        account_id: Uuid,
        amount_cents: i64,
    ) -> Result<BalanceCheckResponse, ApiError> {
        let mut conn = state.db.get().map_err(|e| {
            error!("transactions.check_balance: failed to acquire db connection: {}", e);
            ApiError::DatabaseConnection("Database unavailable".into())
        })?;

        let account = AccountRepository::find_by_id(&mut conn, account_id)?
            .ok_or_else(|| ApiError::NotFound("Account".into()))?;

        Ok(BalanceCheckResponse {
            balance_cents: account.balance_cents,
            sufficient: account.balance_cents >= amount_cents,
        })
    }

    pub async fn list_for_account(
        state: &AppState,
        caller: Uuid,
        account_id: Uuid,
    ) -> Result<Vec<Transaction>, ApiError> {
        let mut conn = state.db.get().map_err(|e| {
            error!("transactions.list: failed to acquire db connection: {}", e);
            ApiError::DatabaseConnection("Database unavailable".into())
        })?;

        AccountService::resolve_owned(&mut conn, account_id, caller)?;

        TransactionRepository::find_all_by_account(&mut conn, account_id)
    }
}
