use crate::models::app_state::jwt_details::JWTInfo;
use crate::models::app_state::remote_services::RemoteServicesInfo;
use eyre::Report;
use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub jwt_details: JWTInfo,

    pub remote_services: RemoteServicesInfo,

    pub app_url: String,

    /// Capacity of each bounded notification channel.
    pub event_queue_depth: usize,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, Report> {
        Ok(Self {
            jwt_details: JWTInfo::new()?,

            remote_services: RemoteServicesInfo::new(),

            app_url: env::var("APP_URL").unwrap_or_else(|_| "http://localhost:8080".into()),

            event_queue_depth: env::var("EVENT_QUEUE_DEPTH")
                .unwrap_or_else(|_| "256".into())
                .parse()?,
        })
    }
}
