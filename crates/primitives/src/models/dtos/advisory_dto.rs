use crate::models::entities::{Advisor, AdvisorSpecialty, AdvisorySession, SessionStatus};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// What a signed-in user submits to `/book-advisory`.
#[derive(Debug, Deserialize)]
pub struct BookAdvisoryRequest {
    pub advisor_id: Uuid,
    pub session_date: NaiveDate,
    pub session_time: NaiveTime,
}

/// Wire payload the session coordinator sends to the advisory service.
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateSessionRequest {
    pub user_id: Uuid,
    pub advisor_id: Uuid,
    pub session_date: NaiveDate,
    pub session_time: NaiveTime,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RescheduleSessionRequest {
    pub session_date: NaiveDate,
    pub session_time: NaiveTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub advisor_id: Uuid,
    pub session_date: NaiveDate,
    pub session_time: NaiveTime,
    pub status: SessionStatus,
    pub created_at: DateTime<Utc>,
}

impl From<AdvisorySession> for SessionRecord {
    fn from(session: AdvisorySession) -> Self {
        Self {
            id: session.id,
            user_id: session.user_id,
            advisor_id: session.advisor_id,
            session_date: session.session_date,
            session_time: session.session_time,
            status: session.status,
            created_at: session.created_at,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateAdvisorRequest {
    #[validate(length(min = 1))]
    pub name: String,

    #[validate(email)]
    pub email: String,

    pub specialty: AdvisorSpecialty,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AdvisorResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub specialty: AdvisorSpecialty,
}

impl From<Advisor> for AdvisorResponse {
    fn from(advisor: Advisor) -> Self {
        Self {
            id: advisor.id,
            name: advisor.name,
            email: advisor.email,
            specialty: advisor.specialty,
        }
    }
}
