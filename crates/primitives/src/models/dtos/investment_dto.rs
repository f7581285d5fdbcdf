use crate::models::entities::{Investment, InvestmentType};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// What a signed-in user submits to `/to-invest`. The caller identity and
/// the funding account come from the request, never from the payload alone.
#[derive(Debug, Deserialize, Validate)]
pub struct InvestmentRequest {
    pub account_id: Uuid,

    pub investment_type: InvestmentType,

    #[validate(range(min = 1))]
    pub amount_cents: i64,
}

/// Wire payload the workflow coordinator sends to the investment service.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct CreateInvestmentRequest {
    pub user_id: Uuid,

    pub account_id: Uuid,

    pub investment_type: InvestmentType,

    #[validate(range(min = 1))]
    pub amount_cents: i64,
}

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct UpdateInvestmentRequest {
    pub investment_type: Option<InvestmentType>,

    #[validate(range(min = 1))]
    pub amount_cents: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvestmentRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub investment_type: InvestmentType,
    pub amount_cents: i64,
    pub created_at: DateTime<Utc>,
}

impl From<Investment> for InvestmentRecord {
    fn from(investment: Investment) -> Self {
        Self {
            id: investment.id,
            user_id: investment.user_id,
            investment_type: investment.investment_type,
            amount_cents: investment.amount_cents,
            created_at: investment.created_at,
        }
    }
}
