use async_trait::async_trait;
use moneta_core::event_bus::EventBus;
use moneta_core::relay::{Mailer, NotificationRelay};
use moneta_primitives::error::ApiError;
use moneta_primitives::events::{EventChannel, NotificationEvent};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

/// Captures deliveries instead of sending them. Fails any message whose
/// body contains the configured marker.
#[derive(Default)]
struct RecordingMailer {
    sent: Mutex<Vec<(String, String, String)>>,
    fail_marker: Option<&'static str>,
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), ApiError> {
        if let Some(marker) = self.fail_marker {
            if body.contains(marker) {
                return Err(ApiError::Internal("smtp unavailable".into()));
            }
        }

        self.sent
            .lock()
            .unwrap()
            .push((to.to_string(), subject.to_string(), body.to_string()));

        Ok(())
    }
}

fn event(message: &str) -> NotificationEvent {
    NotificationEvent::new(Uuid::new_v4(), "ada", "ada@example.com", message)
}

async fn drain(streams: moneta_core::event_bus::EventStreams, mailer: Arc<RecordingMailer>) {
    for handle in NotificationRelay::spawn(streams, mailer) {
        handle.await.unwrap();
    }
}

#[tokio::test]
async fn test_relay_delivers_in_publish_order() {
    let (bus, streams) = EventBus::bounded(8);
    let mailer = Arc::new(RecordingMailer::default());

    for i in 0..3 {
        bus.publish(EventChannel::Transaction, event(&format!("movement {}", i)));
    }

    // closing the sender side lets the consumer loops run to completion
    drop(bus);
    drain(streams, mailer.clone()).await;

    let sent = mailer.sent.lock().unwrap();
    assert_eq!(sent.len(), 3);
    for (i, (to, subject, body)) in sent.iter().enumerate() {
        assert_eq!(to, "ada@example.com");
        assert_eq!(subject, "Moneta transaction notification");
        assert!(body.starts_with(&format!("Dear ada,\n\nmovement {}\n\nSent at ", i)));
    }
}

#[tokio::test]
async fn test_relay_keeps_draining_after_failed_delivery() {
    let (bus, streams) = EventBus::bounded(8);
    let mailer = Arc::new(RecordingMailer {
        sent: Mutex::new(Vec::new()),
        fail_marker: Some("second"),
    });

    bus.publish(EventChannel::Account, event("first"));
    bus.publish(EventChannel::Account, event("second"));
    bus.publish(EventChannel::Account, event("third"));

    drop(bus);
    drain(streams, mailer.clone()).await;

    let sent = mailer.sent.lock().unwrap();
    assert_eq!(sent.len(), 2);
    assert!(sent[0].2.contains("first"));
    assert!(sent[1].2.contains("third"));
}

#[tokio::test]
async fn test_full_queue_drops_overflowing_events() {
    let (bus, streams) = EventBus::bounded(2);
    let mailer = Arc::new(RecordingMailer::default());

    // no consumer is running yet, so the third publish finds the queue full
    bus.publish(EventChannel::Investment, event("kept 1"));
    bus.publish(EventChannel::Investment, event("kept 2"));
    bus.publish(EventChannel::Investment, event("dropped"));

    drop(bus);
    drain(streams, mailer.clone()).await;

    let sent = mailer.sent.lock().unwrap();
    assert_eq!(sent.len(), 2);
    assert!(sent.iter().all(|(_, _, body)| !body.contains("dropped")));
}

#[tokio::test]
async fn test_publish_after_relay_gone_is_swallowed() {
    let (bus, streams) = EventBus::bounded(4);

    // the receiver half is dropped, as when the relay has shut down
    drop(streams);

    bus.publish(EventChannel::Advisory, event("into the void"));
}

#[tokio::test]
async fn test_each_channel_gets_its_own_subject() {
    let (bus, streams) = EventBus::bounded(4);
    let mailer = Arc::new(RecordingMailer::default());

    bus.publish(EventChannel::Account, event("a"));
    bus.publish(EventChannel::Transaction, event("b"));
    bus.publish(EventChannel::Investment, event("c"));
    bus.publish(EventChannel::Advisory, event("d"));

    drop(bus);
    drain(streams, mailer.clone()).await;

    let sent = mailer.sent.lock().unwrap();
    let subjects: HashSet<&str> = sent.iter().map(|(_, s, _)| s.as_str()).collect();
    assert_eq!(
        subjects,
        HashSet::from([
            "Moneta account notification",
            "Moneta transaction notification",
            "Moneta investment notification",
            "Moneta advisory notification",
        ])
    );
}
