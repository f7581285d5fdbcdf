use diesel::r2d2::{self, ConnectionManager};
use diesel::PgConnection;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;

pub type DbPool = r2d2::Pool<ConnectionManager<PgConnection>>;

use crate::clients::{AdvisoryClient, EmailClient, InvestmentClient, LedgerClient};
use crate::event_bus::{EventBus, EventStreams};
use eyre::Result;
pub use moneta_primitives::models::app_state::AppConfig;

/// Shared state for all three binaries. Each binary only touches the
/// clients it needs; constructing the unused ones is cheap since they
/// share one reqwest client.
#[derive(Clone)]
pub struct AppState {
    pub db: DbPool,
    pub http_client: Client,
    pub config: AppConfig,
    pub invest: InvestmentClient,
    pub advisory: AdvisoryClient,
    pub ledger: LedgerClient,
    pub email: EmailClient,
    pub events: EventBus,
}

impl AppState {
    /// Returns the state plus the receiver halves of the notification
    /// queues; the caller hands those to `NotificationRelay::spawn`.
    pub fn new(db: DbPool, config: AppConfig) -> Result<(Arc<Self>, EventStreams)> {
        let http = Client::builder().timeout(Duration::from_secs(30)).build()?;

        let invest = InvestmentClient::new(http.clone(), &config.remote_services.investment_base_url)?;

        let advisory = AdvisoryClient::new(http.clone(), &config.remote_services.advisory_base_url)?;

        let ledger = LedgerClient::new(http.clone(), &config.remote_services.ledger_base_url)?;

        let email = EmailClient::new();

        let (events, streams) = EventBus::bounded(config.event_queue_depth);

        let state = Arc::new(Self {
            db,
            http_client: http,
            config,
            invest,
            advisory,
            ledger,
            email,
            events,
        });

        Ok((state, streams))
    }
}
