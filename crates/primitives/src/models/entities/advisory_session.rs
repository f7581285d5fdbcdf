use crate::models::entities::enum_types::SessionStatus;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use diesel::{Identifiable, Insertable, Queryable};
use serde::Serialize;
use uuid::Uuid;

/// `advisor_id` is deliberately not a foreign key: deleting an advisor
/// leaves their booked sessions behind with a dangling reference.
#[derive(Debug, Clone, Queryable, Identifiable, Serialize)]
#[diesel(table_name = crate::schema::advisory_sessions)]
pub struct AdvisorySession {
    pub id: Uuid,
    pub user_id: Uuid,
    pub advisor_id: Uuid,
    pub session_date: NaiveDate,
    pub session_time: NaiveTime,
    pub status: SessionStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::advisory_sessions)]
pub struct NewAdvisorySession {
    pub user_id: Uuid,
    pub advisor_id: Uuid,
    pub session_date: NaiveDate,
    pub session_time: NaiveTime,
    pub status: SessionStatus,
}
