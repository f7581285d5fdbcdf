use crate::app_state::AppState;
use crate::repositories::advisor_repository::AdvisorRepository;
use crate::repositories::session_repository::SessionRepository;
use diesel::PgConnection;
use moneta_primitives::error::ApiError;
use moneta_primitives::models::dtos::advisory_dto::{
    CreateAdvisorRequest, CreateSessionRequest, RescheduleSessionRequest,
};
use moneta_primitives::models::entities::advisor::{Advisor, NewAdvisor};
use moneta_primitives::models::entities::advisory_session::{AdvisorySession, NewAdvisorySession};
use moneta_primitives::models::entities::enum_types::{AdvisorSpecialty, SessionStatus};
use tracing::{error, info, warn};
use uuid::Uuid;

/// Owns the advisors and advisory_sessions tables. Sessions reference
/// advisors by bare id: booking does not verify the advisor exists, and
/// deleting an advisor leaves their sessions pointing at nothing.
pub struct AdvisoryDeskService;

impl AdvisoryDeskService {
    pub async fn create_session(
        state: &AppState,
        payload: CreateSessionRequest,
    ) -> Result<AdvisorySession, ApiError> {
        let mut conn = state.db.get().map_err(|e| {
            error!("advisory.create_session: failed to acquire db connection: {}", e);
            ApiError::DatabaseConnection("Database unavailable".into())
        })?;

        let session = SessionRepository::create(
            &mut conn,
            NewAdvisorySession {
                user_id: payload.user_id,
                advisor_id: payload.advisor_id,
                session_date: payload.session_date,
                session_time: payload.session_time,
                status: SessionStatus::Pending,
            },
        )?;

        info!(
            session_id = %session.id,
            user_id = %session.user_id,
            advisor_id = %session.advisor_id,
            "Advisory session created"
        );

        Ok(session)
    }

    pub async fn list_sessions(
        state: &AppState,
        user_id: Uuid,
    ) -> Result<Vec<AdvisorySession>, ApiError> {
        let mut conn = state.db.get().map_err(|e| {
            error!("advisory.list_sessions: failed to acquire db connection: {}", e);
            ApiError::DatabaseConnection("Database unavailable".into())
        })?;

        SessionRepository::find_all_by_user(&mut conn, user_id)
    }

    pub async fn reschedule_session(
        state: &AppState,
        user_id: Uuid,
        session_id: Uuid,
        payload: RescheduleSessionRequest,
    ) -> Result<AdvisorySession, ApiError> {
        let mut conn = state.db.get().map_err(|e| {
            error!("advisory.reschedule: failed to acquire db connection: {}", e);
            ApiError::DatabaseConnection("Database unavailable".into())
        })?;

        Self::resolve_owned(&mut conn, session_id, user_id)?;

        let session = SessionRepository::reschedule(
            &mut conn,
            session_id,
            payload.session_date,
            payload.session_time,
        )?;

        info!(session_id = %session.id, "Advisory session rescheduled");

        Ok(session)
    }

    /// Cancellation removes the row outright; no CANCELLED status is ever
    /// stored.
    pub async fn cancel_session(
        state: &AppState,
        user_id: Uuid,
        session_id: Uuid,
    ) -> Result<(), ApiError> {
        let mut conn = state.db.get().map_err(|e| {
            error!("advisory.cancel: failed to acquire db connection: {}", e);
            ApiError::DatabaseConnection("Database unavailable".into())
        })?;

        Self::resolve_owned(&mut conn, session_id, user_id)?;

        SessionRepository::delete(&mut conn, session_id)?;

        info!(session_id = %session_id, user_id = %user_id, "Advisory session cancelled");

        Ok(())
    }

    pub async fn create_advisor(
        state: &AppState,
        payload: CreateAdvisorRequest,
    ) -> Result<Advisor, ApiError> {
        let mut conn = state.db.get().map_err(|e| {
            error!("advisory.create_advisor: failed to acquire db connection: {}", e);
            ApiError::DatabaseConnection("Database unavailable".into())
        })?;

        let advisor = AdvisorRepository::create(
            &mut conn,
            NewAdvisor {
                name: &payload.name,
                email: &payload.email,
                specialty: payload.specialty,
            },
        )?;

        info!(advisor_id = %advisor.id, email = %advisor.email, "Advisor created");

        Ok(advisor)
    }

    pub async fn list_advisors(state: &AppState) -> Result<Vec<Advisor>, ApiError> {
        let mut conn = state.db.get().map_err(|e| {
            error!("advisory.list_advisors: failed to acquire db connection: {}", e);
            ApiError::DatabaseConnection("Database unavailable".into())
        })?;

        AdvisorRepository::find_all(&mut conn)
    }

    pub async fn delete_advisor(state: &AppState, advisor_id: Uuid) -> Result<(), ApiError> {
        let mut conn = state.db.get().map_err(|e| {
            error!("advisory.delete_advisor: failed to acquire db connection: {}", e);
            ApiError::DatabaseConnection("Database unavailable".into())
        })?;

        let deleted = AdvisorRepository::delete(&mut conn, advisor_id)?;

        if deleted == 0 {
            return Err(ApiError::NotFound("Advisor".into()));
        }

        info!(advisor_id = %advisor_id, "Advisor deleted");

        Ok(())
    }

    /// Seeds a default advisor per specialty when the table is empty.
    /// Best-effort at startup: failures are logged, not fatal.
    pub fn seed_default_advisors(state: &AppState) {
        let mut conn = match state.db.get() {
            Ok(conn) => conn,
            Err(e) => {
                warn!("advisory.seed: no db connection: {}", e);
                return;
            }
        };

        match AdvisorRepository::count(&mut conn) {
            Ok(0) => {}
            Ok(_) => return,
            Err(e) => {
                warn!("advisory.seed: count failed: {}", e);
                return;
            }
        }

        let defaults = [
            ("Amara Obi", "amara.obi@moneta.finance", AdvisorSpecialty::Retirement),
            ("Denis Hart", "denis.hart@moneta.finance", AdvisorSpecialty::Tax),
            ("Ifeoma Eze", "ifeoma.eze@moneta.finance", AdvisorSpecialty::Investments),
            ("Lena Brandt", "lena.brandt@moneta.finance", AdvisorSpecialty::Insurance),
            ("Tunde Alabi", "tunde.alabi@moneta.finance", AdvisorSpecialty::EstatePlanning),
        ];

        for (name, email, specialty) in defaults {
            match AdvisorRepository::create(
                &mut conn,
                NewAdvisor {
                    name,
                    email,
                    specialty,
                },
            ) {
                Ok(advisor) => info!(advisor_id = %advisor.id, email = %email, "Seeded advisor"),
                Err(e) => warn!("advisory.seed: could not seed {}: {}", email, e),
            }
        }
    }

    fn resolve_owned(
        conn: &mut PgConnection,
        session_id: Uuid,
        user_id: Uuid,
    ) -> Result<AdvisorySession, ApiError> {
        let session = SessionRepository::find_by_id(conn, session_id)?
            .ok_or_else(|| ApiError::NotFound("Advisory session".into()))?;

        if session.user_id != user_id {
            return Err(ApiError::Unauthorized(
                "Advisory session does not belong to the caller".into(),
            ));
        }

        Ok(session)
    }
}
