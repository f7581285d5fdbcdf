use crate::app_state::AppState;
use crate::repositories::account_repository::AccountRepository;
use crate::services::notification_service::NotificationService;
use diesel::PgConnection;
use moneta_primitives::error::ApiError;
use moneta_primitives::events::EventChannel;
use moneta_primitives::models::dtos::account_dto::{CreateAccountRequest, UpdateAccountRequest};
use moneta_primitives::models::entities::account::{Account, NewAccount};
use tracing::{error, info};
use uuid::Uuid;

pub struct AccountService;

impl AccountService {
    pub async fn create_account(
        state: &AppState,
        caller: Uuid,
        payload: CreateAccountRequest,
    ) -> Result<Account, ApiError> {
        let mut conn = state.db.get().map_err(|e| {
            error!("accounts.create: failed to acquire db connection: {}", e);
            ApiError::DatabaseConnection("Database unavailable".into())
        })?;

        // The opening balance is taken as-is, negative figures included.
        let account = AccountRepository::create(
            &mut conn,
            NewAccount {
                user_id: caller,
                account_type: payload.account_type,
                balance_cents: payload.initial_balance_cents,
            },
        )?;

        drop(conn);

        info!(
            account_id = %account.id,
            user_id = %caller,
            account_type = %account.account_type,
            "Account created"
        );

        NotificationService::dispatch(
            state,
            EventChannel::Account,
            caller,
            format!(
                "Your {} account was opened with a balance of {} cents",
                account.account_type, account.balance_cents
            ),
        );

        Ok(account)
    }

    pub async fn list_accounts(state: &AppState, caller: Uuid) -> Result<Vec<Account>, ApiError> {
        let mut conn = state.db.get().map_err(|e| {
            error!("accounts.list: failed to acquire db connection: {}", e);
            ApiError::DatabaseConnection("Database unavailable".into())
        })?;

        AccountRepository::find_all_by_user(&mut conn, caller)
    }

    pub async fn update_account(
        state: &AppState,
        caller: Uuid,
        account_id: Uuid,
        payload: UpdateAccountRequest,
    ) -> Result<Account, ApiError> {
        let mut conn = state.db.get().map_err(|e| {
            error!("accounts.update: failed to acquire db connection: {}", e);
            ApiError::DatabaseConnection("Database unavailable".into())
        })?;

        Self::resolve_owned(&mut conn, account_id, caller)?;

        let account = AccountRepository::update_type(&mut conn, account_id, payload.account_type)?;

        drop(conn);

        NotificationService::dispatch(
            state,
            EventChannel::Account,
            caller,
            format!(
                "Your account {} is now a {} account",
                account.id, account.account_type
            ),
        );

        Ok(account)
    }

    pub async fn delete_account(
        state: &AppState,
        caller: Uuid,
        account_id: Uuid,
    ) -> Result<(), ApiError> {
        let mut conn = state.db.get().map_err(|e| {
            error!("accounts.delete: failed to acquire db connection: {}", e);
            ApiError::DatabaseConnection("Database unavailable".into())
        })?;

        let account = Self::resolve_owned(&mut conn, account_id, caller)?;

        AccountRepository::delete(&mut conn, account_id)?;

        drop(conn);

        info!(account_id = %account_id, user_id = %caller, "Account deleted");

        NotificationService::dispatch(
            state,
            EventChannel::Account,
            caller,
            format!("Your {} account {} was closed", account.account_type, account.id),
        );

        Ok(())
    }

    /// Resolves an account and enforces ownership: missing rows are
    /// `NotFound`, foreign rows `Unauthorized`.
    pub fn resolve_owned(
        conn: &mut PgConnection,
        account_id: Uuid,
        caller: Uuid,
    ) -> Result<Account, ApiError> {
        let account = AccountRepository::find_by_id(conn, account_id)?
            .ok_or_else(|| ApiError::NotFound("Account".into()))?;

        if account.user_id != caller {
            return Err(ApiError::Unauthorized(
                "Account does not belong to the caller".into(),
            ));
        }

        Ok(account)
    }
}
