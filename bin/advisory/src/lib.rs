mod observability;

pub use moneta_primitives::error::ApiError;

use eyre::Report;
use moneta_core::bootstrap::{create_db_pool, load_env, serve, setup_logging};
use moneta_core::clients::EmailClient;
use moneta_core::relay::NotificationRelay;
use moneta_core::services::AdvisoryDeskService;
use moneta_core::AppState;
use moneta_primitives::models::AppConfig;
use std::sync::Arc;
use tracing::info;

pub async fn run() -> Result<(), Report> {
    // 1. load environment variables
    load_env();

    // 2. initialize logging first (so we can log everything else)
    setup_logging();

    info!("Starting Moneta advisory service...");

    // 3. load configuration
    let config = AppConfig::from_env()?;

    // 4. create database connection pool
    let pool = create_db_pool()?;

    // 5. build application state, keeping the notification streams
    let (state, streams) = AppState::new(pool, config)?;

    // 6. start the notification relay
    NotificationRelay::spawn(streams, Arc::new(EmailClient::new()));

    // 7. seed the advisor roster when the table is empty
    AdvisoryDeskService::seed_default_advisors(&state);

    // 8. initialize metrics
    let (metric_layer, metric_handle) = observability::metrics::setup_metrics();

    // 9. build axum router
    let app = moneta_api::app::advisory_router(state, metric_layer, metric_handle);

    // 10. start HTTP server
    serve(app, 8082).await?;

    info!("Moneta advisory service shut down gracefully");
    Ok(())
}
