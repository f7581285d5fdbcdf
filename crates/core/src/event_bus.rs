use moneta_primitives::events::{EventChannel, NotificationEvent};
use tokio::sync::mpsc;
use tracing::warn;

/// Sender half of the in-process notification queues. One bounded channel
/// per event class, so ordering holds within a class but not across
/// classes.
#[derive(Clone)]
pub struct EventBus {
    account_tx: mpsc::Sender<NotificationEvent>,
    transaction_tx: mpsc::Sender<NotificationEvent>,
    investment_tx: mpsc::Sender<NotificationEvent>,
    advisory_tx: mpsc::Sender<NotificationEvent>,
}

/// Receiver half, handed to the notification relay exactly once.
pub struct EventStreams {
    pub account_rx: mpsc::Receiver<NotificationEvent>,
    pub transaction_rx: mpsc::Receiver<NotificationEvent>,
    pub investment_rx: mpsc::Receiver<NotificationEvent>,
    pub advisory_rx: mpsc::Receiver<NotificationEvent>,
}

impl EventBus {
    pub fn bounded(depth: usize) -> (Self, EventStreams) {
        let (account_tx, account_rx) = mpsc::channel(depth);
        let (transaction_tx, transaction_rx) = mpsc::channel(depth);
        let (investment_tx, investment_rx) = mpsc::channel(depth);
        let (advisory_tx, advisory_rx) = mpsc::channel(depth);

        (
            Self {
                account_tx,
                transaction_tx,
                investment_tx,
                advisory_tx,
            },
            EventStreams {
                account_rx,
                transaction_rx,
                investment_rx,
                advisory_rx,
            },
        )
    }

    /// Fire and forget. A full queue or a gone relay drops the event with a
    /// warning; the business operation that published it never finds out.
    pub fn publish(&self, channel: EventChannel, event: NotificationEvent) {
        let tx = match channel {
            EventChannel::Account => &self.account_tx,
            EventChannel::Transaction => &self.transaction_tx,
            EventChannel::Investment => &self.investment_tx,
            EventChannel::Advisory => &self.advisory_tx,
        };

        if let Err(e) = tx.try_send(event) {
            warn!(channel = %channel, error = %e, "Notification event dropped");
        }
    }
}
