use crate::models::entities::{Account, AccountType};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The opening balance is accepted as-is. Nothing here stops a negative
/// figure, matching the recorder's tolerance for overdrawn accounts.
#[derive(Debug, Deserialize)]
pub struct CreateAccountRequest {
    pub account_type: AccountType,

    #[serde(default)]
    pub initial_balance_cents: i64,
}

#[derive(Debug, Deserialize)]
pub struct UpdateAccountRequest {
    pub account_type: AccountType,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AccountResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub account_type: AccountType,
    pub balance_cents: i64,
    pub created_at: DateTime<Utc>,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            user_id: account.user_id,
            account_type: account.account_type,
            balance_cents: account.balance_cents,
            created_at: account.created_at,
        }
    }
}
