use crate::event_bus::EventStreams;
use async_trait::async_trait;
use moneta_primitives::error::ApiError;
use moneta_primitives::events::{EventChannel, NotificationEvent};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// Delivery seam so tests can capture outgoing mail instead of sending it.
#[async_trait]
pub trait Mailer: Send + Sync + 'static {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), ApiError>;
}

pub struct NotificationRelay;

impl NotificationRelay {
    /// Spawns one consumer task per event class. Each task drains its queue
    /// in order until the matching sender side is dropped.
    pub fn spawn(streams: EventStreams, mailer: Arc<dyn Mailer>) -> Vec<JoinHandle<()>> {
        vec![
            Self::consume(EventChannel::Account, streams.account_rx, mailer.clone()),
            Self::consume(
                EventChannel::Transaction,
                streams.transaction_rx,
                mailer.clone(),
            ),
            Self::consume(
                EventChannel::Investment,
                streams.investment_rx,
                mailer.clone(),
            ),
            Self::consume(EventChannel::Advisory, streams.advisory_rx, mailer),
        ]
    }

    fn consume(
        channel: EventChannel,
        mut rx: mpsc::Receiver<NotificationEvent>,
        mailer: Arc<dyn Mailer>,
    ) -> JoinHandle<()> {
        tokio::spawn(async move {
            while let Some(event) = rx.recv().await {
                let subject = format!("Moneta {} notification", channel);
                let body = Self::compose(&event);

                // A failed delivery is logged and skipped; the queue keeps
                // draining.
                if let Err(e) = mailer.send(&event.email, &subject, &body).await {
                    error!(
                        channel = %channel,
                        user_id = %event.user_id,
                        error = %e,
                        "Notification delivery failed"
                    );
                }
            }

            info!(channel = %channel, "Notification stream closed");
        })
    }

    fn compose(event: &NotificationEvent) -> String {
        format!(
            "Dear {},\n\n{}\n\nSent at {}",
            event.username,
            event.message,
            event.timestamp.to_rfc3339()
        )
    }
}
