use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::Display;
use uuid::Uuid;

/// The four logical event classes, one per originating domain. Every class
/// is consumed by the same relay handler; ordering is guaranteed within a
/// class only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "lowercase")]
pub enum EventChannel {
    Account,
    Transaction,
    Investment,
    Advisory,
}

/// Wire payload published to a notification channel. Ephemeral: the relay
/// never persists it, and ownership moves producer -> queue -> consumer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationEvent {
    pub user_id: Uuid,
    pub username: String,
    pub email: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl NotificationEvent {
    pub fn new(
        user_id: Uuid,
        username: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            user_id,
            username: username.into(),
            email: email.into(),
            message: message.into(),
            timestamp: Utc::now(),
        }
    }
}
