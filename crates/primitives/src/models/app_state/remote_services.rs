use std::env;

/// Base URLs for the peer services. Every HTTP client in the workspace is
/// constructed from one of these, so tests can point a coordinator at a
/// local mock server instead of the real deployment.
#[derive(Debug, Clone)]
pub struct RemoteServicesInfo {
    pub investment_base_url: String,
    pub advisory_base_url: String,
    pub ledger_base_url: String,
}

impl RemoteServicesInfo {
    pub fn new() -> Self {
        Self {
            investment_base_url: env::var("INVESTMENT_SERVICE_URL")
                .unwrap_or_else(|_| "http://localhost:8081".into()),

            advisory_base_url: env::var("ADVISORY_SERVICE_URL")
                .unwrap_or_else(|_| "http://localhost:8082".into()),

            ledger_base_url: env::var("LEDGER_SERVICE_URL")
                .unwrap_or_else(|_| "http://localhost:8080".into()),
        }
    }
}
