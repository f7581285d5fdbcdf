pub mod advisory;
pub mod email;
pub mod investment;
pub mod ledger;

pub use advisory::AdvisoryClient;
pub use email::EmailClient;
pub use investment::InvestmentClient;
pub use ledger::LedgerClient;

use moneta_primitives::error::ApiError;

/// Maps a non-success peer response onto the error taxonomy. Business
/// rejections (4xx) are relayed with their original status and body; server
/// errors collapse into a remote-operation failure.
pub(crate) async fn remote_failure(resp: reqwest::Response) -> ApiError {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();

    if status.is_client_error() {
        ApiError::RemoteRejected(status, body)
    } else {
        ApiError::RemoteOperationFailed(format!("status {}: {}", status, body))
    }
}
