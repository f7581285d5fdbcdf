use crate::relay::Mailer;
use async_trait::async_trait;
use moneta_primitives::error::ApiError;
use tracing::info;

/// Outbound email is simulated: a delivery is a structured log line. Wiring
/// a real SMTP transport stays behind the `Mailer` trait.
#[derive(Clone, Default)]
pub struct EmailClient;

impl EmailClient {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Mailer for EmailClient {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), ApiError> {
        info!(to = %to, subject = %subject, body_len = body.len(), "Email dispatched");
        Ok(())
    }
}
