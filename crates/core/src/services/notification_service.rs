use crate::app_state::AppState;
use crate::repositories::user_repository::UserRepository;
use moneta_primitives::events::{EventChannel, NotificationEvent};
use tracing::warn;
use uuid::Uuid;

pub struct NotificationService;

impl NotificationService {
    /// Best-effort publication. Looks up the recipient for the event
    /// payload and publishes; any failure along the way is logged and the
    /// business operation that called us never sees it.
    pub fn dispatch(state: &AppState, channel: EventChannel, user_id: Uuid, message: String) {
        let mut conn = match state.db.get() {
            Ok(conn) => conn,
            Err(e) => {
                warn!(channel = %channel, error = %e, "Notification skipped: no db connection");
                return;
            }
        };

        let user = match UserRepository::find_by_id(&mut conn, user_id) {
            Ok(Some(user)) => user,
            Ok(None) => {
                warn!(channel = %channel, user_id = %user_id, "Notification skipped: unknown user");
                return;
            }
            Err(e) => {
                warn!(channel = %channel, user_id = %user_id, error = %e, "Notification skipped: user lookup failed");
                return;
            }
        };

        state.events.publish(
            channel,
            NotificationEvent::new(user.id, user.username, user.email, message),
        );
    }
}
