use crate::models::entities::enum_types::InvestmentType;
use chrono::{DateTime, Utc};
use diesel::{Identifiable, Insertable, Queryable};
use serde::Serialize;
use uuid::Uuid;

/// Owned by the investment service. `user_id` refers to a user row in the
/// ledger service's database, so there is no foreign key here.
#[derive(Debug, Clone, Queryable, Identifiable, Serialize)]
#[diesel(table_name = crate::schema::investments)]
pub struct Investment {
    pub id: Uuid,
    pub user_id: Uuid,
    pub investment_type: InvestmentType,
    pub amount_cents: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::investments)]
pub struct NewInvestment {
    pub user_id: Uuid,
    pub investment_type: InvestmentType,
    pub amount_cents: i64,
}
