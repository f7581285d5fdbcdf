use crate::app_state::AppState;
use crate::services::notification_service::NotificationService;
use moneta_primitives::error::ApiError;
use moneta_primitives::events::EventChannel;
use moneta_primitives::models::dtos::advisory_dto::{
    BookAdvisoryRequest, CreateSessionRequest, RescheduleSessionRequest, SessionRecord,
};
use tracing::info;
use uuid::Uuid;

/// Fronts the remote advisory service. Each mutating call is a synchronous
/// round trip; only a successful round trip publishes an event, and a
/// failed publish never turns a remote success into a caller-visible error.
pub struct AdvisoryService;

impl AdvisoryService {
    pub async fn book(
        state: &AppState,
        caller: Uuid,
        payload: BookAdvisoryRequest,
    ) -> Result<SessionRecord, ApiError> {
        let session = state
            .advisory
            .book(&CreateSessionRequest {
                user_id: caller,
                advisor_id: payload.advisor_id,
                session_date: payload.session_date,
                session_time: payload.session_time,
            })
            .await?;

        info!(
            session_id = %session.id,
            user_id = %caller,
            advisor_id = %session.advisor_id,
            "Advisory session booked"
        );

        NotificationService::dispatch(
            state,
            EventChannel::Advisory,
            caller,
            format!(
                "Advisory session booked for {} at {}",
                session.session_date, session.session_time
            ),
        );

        Ok(session)
    }

    pub async fn view_sessions(
        state: &AppState,
        caller: Uuid,
    ) -> Result<Vec<SessionRecord>, ApiError> {
        state.advisory.list_for_user(caller).await
    }

    pub async fn reschedule(
        state: &AppState,
        caller: Uuid,
        session_id: Uuid,
        payload: RescheduleSessionRequest,
    ) -> Result<SessionRecord, ApiError> {
        let session = state
            .advisory
            .reschedule(session_id, caller, &payload)
            .await?;

        NotificationService::dispatch(
            state,
            EventChannel::Advisory,
            caller,
            format!(
                "Advisory session {} rescheduled to {} at {}",
                session.id, session.session_date, session.session_time
            ),
        );

        Ok(session)
    }

    pub async fn cancel(
        state: &AppState,
        caller: Uuid,
        session_id: Uuid,
    ) -> Result<(), ApiError> {
        state.advisory.cancel(session_id, caller).await?;

        NotificationService::dispatch(
            state,
            EventChannel::Advisory,
            caller,
            format!("Advisory session {} cancelled", session_id),
        );

        Ok(())
    }
}
