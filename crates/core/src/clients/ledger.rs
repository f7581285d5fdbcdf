use moneta_primitives::error::ApiError;
use moneta_primitives::models::dtos::transaction_dto::{
    BalanceCheckRequest, BalanceCheckResponse,
};
use reqwest::{Client, Url};
use tracing::error;
use uuid::Uuid;

/// Client for the ledger's public balance check. Used by the invest service
/// to re-verify funds server-side before recording an investment.
#[derive(Clone)]
pub struct LedgerClient {
    http: Client,
    base_url: Url,
}

impl LedgerClient {
    pub fn new(http: Client, base_url: &str) -> Result<Self, ApiError> {
        let base_url = Url::parse(base_url)
            .map_err(|_| ApiError::Internal("Invalid ledger service base URL".into()))?;

        Ok(Self { http, base_url })
    }

    pub async fn check_balance(
        &self,
        account_id: Uuid,
        amount_cents: i64,
    ) -> Result<BalanceCheckResponse, ApiError> {
        let url = self.endpoint("check-balance");

        let payload = BalanceCheckRequest {
            account_id,
            amount_cents,
        };

        let resp = self
            .http
            .post(url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to reach ledger service");
                ApiError::RemoteOperationFailed(format!("ledger service unreachable: {}", e))
            })?;

        if !resp.status().is_success() {
            return Err(super::remote_failure(resp).await);
        }

        resp.json::<BalanceCheckResponse>().await.map_err(|e| {
            error!(error = %e, "Invalid ledger service response");
            ApiError::RemoteOperationFailed("invalid ledger service response".into())
        })
    }

    fn endpoint(&self, path: &str) -> Url {
        let mut url = self.base_url.clone();
        url.set_path(path);
        url
    }
}
