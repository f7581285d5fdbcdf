use crate::models::entities::{Transaction, TransactionKind};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct DepositRequest {
    pub account_id: Uuid,

    #[validate(range(min = 1))]
    pub amount_cents: i64,
}

/// No sufficiency check belongs here or downstream; a withdrawal may push
/// the balance negative.
#[derive(Debug, Deserialize, Validate)]
pub struct WithdrawRequest {
    pub account_id: Uuid,

    #[validate(range(min = 1))]
    pub amount_cents: i64,
}

#[derive(Debug, Deserialize, Validate)]
pub struct TransferRequest {
    pub from_account_id: Uuid,

    pub to_account_id: Uuid,

    #[validate(range(min = 1))]
    pub amount_cents: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BalanceCheckRequest {
    pub account_id: Uuid,
    pub amount_cents: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BalanceCheckResponse {
    pub balance_cents: i64,
    pub sufficient: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TransactionResponse {
    pub id: Uuid,
    pub account_id: Uuid,
    pub kind: TransactionKind,
    pub amount_cents: i64,
    pub recorded_at: DateTime<Utc>,
}

impl From<Transaction> for TransactionResponse {
    fn from(tx: Transaction) -> Self {
        Self {
            id: tx.id,
            account_id: tx.account_id,
            kind: tx.kind,
            amount_cents: tx.amount_cents,
            recorded_at: tx.recorded_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TransactionsResponse {
    pub transactions: Vec<TransactionResponse>,
}
