use chrono::{NaiveDate, NaiveTime};
use diesel::prelude::*;
use moneta_primitives::error::ApiError;
use moneta_primitives::models::entities::advisory_session::{AdvisorySession, NewAdvisorySession};
use moneta_primitives::models::entities::enum_types::SessionStatus;
use moneta_primitives::schema::advisory_sessions;
use uuid::Uuid;

pub struct SessionRepository;

impl SessionRepository {
    pub fn create(
        conn: &mut PgConnection,
        new_session: NewAdvisorySession,
    ) -> Result<AdvisorySession, ApiError> {
        let session = diesel::insert_into(advisory_sessions::table)
            .values(&new_session)
            .get_result::<AdvisorySession>(conn)?;

        Ok(session)
    }

    pub fn find_by_id(
        conn: &mut PgConnection,
        session_id: Uuid,
    ) -> Result<Option<AdvisorySession>, ApiError> {
        let session = advisory_sessions::table
            .find(session_id)
            .first::<AdvisorySession>(conn)
            .optional()?;

        Ok(session)
    }

    pub fn find_all_by_user(
        conn: &mut PgConnection,
        user_id: Uuid,
    ) -> Result<Vec<AdvisorySession>, ApiError> {
        let rows = advisory_sessions::table
            .filter(advisory_sessions::user_id.eq(user_id))
            .order((
                advisory_sessions::session_date.asc(),
                advisory_sessions::session_time.asc(),
            ))
            .load::<AdvisorySession>(conn)?;

        Ok(rows)
    }

    pub fn reschedule(
        conn: &mut PgConnection,
        session_id: Uuid,
        session_date: NaiveDate,
        session_time: NaiveTime,
    ) -> Result<AdvisorySession, ApiError> {
        let session = diesel::update(advisory_sessions::table.find(session_id))
            .set((
                advisory_sessions::session_date.eq(session_date),
                advisory_sessions::session_time.eq(session_time),
                advisory_sessions::status.eq(SessionStatus::Rescheduled),
            ))
            .get_result::<AdvisorySession>(conn)?;

        Ok(session)
    }

    /// Cancellation is a hard delete; no tombstone row survives.
    pub fn delete(conn: &mut PgConnection, session_id: Uuid) -> Result<usize, ApiError> {
        let deleted = diesel::delete(advisory_sessions::table.find(session_id)).execute(conn)?;

        Ok(deleted)
    }
}
