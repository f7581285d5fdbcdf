use moneta_primitives::error::ApiError;
use moneta_primitives::models::dtos::investment_dto::{
    CreateInvestmentRequest, InvestmentRecord, UpdateInvestmentRequest,
};
use reqwest::{Client, Url};
use tracing::error;
use uuid::Uuid;

/// Client for the invest service. The base URL comes from configuration so
/// tests can point it at a mock server.
#[derive(Clone)]
pub struct InvestmentClient {
    http: Client,
    base_url: Url,
}

impl InvestmentClient {
    pub fn new(http: Client, base_url: &str) -> Result<Self, ApiError> {
        let base_url = Url::parse(base_url)
            .map_err(|_| ApiError::Internal("Invalid invest service base URL".into()))?;

        Ok(Self { http, base_url })
    }

    pub async fn create(
        &self,
        payload: &CreateInvestmentRequest,
    ) -> Result<InvestmentRecord, ApiError> {
        let url = self.endpoint("investments");

        let resp = self
            .http
            .post(url)
            .json(payload)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to reach invest service");
                ApiError::RemoteOperationFailed(format!("invest service unreachable: {}", e))
            })?;

        if !resp.status().is_success() {
            return Err(super::remote_failure(resp).await);
        }

        resp.json::<InvestmentRecord>().await.map_err(|e| {
            error!(error = %e, "Invalid invest service response");
            ApiError::RemoteOperationFailed("invalid invest service response".into())
        })
    }

    pub async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<InvestmentRecord>, ApiError> {
        let mut url = self.endpoint("investments");
        url.query_pairs_mut()
            .append_pair("user_id", &user_id.to_string());

        let resp = self.http.get(url).send().await.map_err(|e| {
            error!(error = %e, "Failed to reach invest service");
            ApiError::RemoteOperationFailed(format!("invest service unreachable: {}", e))
        })?;

        if !resp.status().is_success() {
            return Err(super::remote_failure(resp).await);
        }

        resp.json::<Vec<InvestmentRecord>>().await.map_err(|e| {
            error!(error = %e, "Invalid invest service response");
            ApiError::RemoteOperationFailed("invalid invest service response".into())
        })
    }

    pub async fn update(
        &self,
        investment_id: Uuid,
        user_id: Uuid,
        payload: &UpdateInvestmentRequest,
    ) -> Result<InvestmentRecord, ApiError> {
        let mut url = self.endpoint(&format!("investments/{}", investment_id));
        url.query_pairs_mut()
            .append_pair("user_id", &user_id.to_string());

        let resp = self
            .http
            .put(url)
            .json(payload)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to reach invest service");
                ApiError::RemoteOperationFailed(format!("invest service unreachable: {}", e))
            })?;

        if !resp.status().is_success() {
            return Err(super::remote_failure(resp).await);
        }

        resp.json::<InvestmentRecord>().await.map_err(|e| {
            error!(error = %e, "Invalid invest service response");
            ApiError::RemoteOperationFailed("invalid invest service response".into())
        })
    }

    pub async fn delete(&self, investment_id: Uuid, user_id: Uuid) -> Result<(), ApiError> {
        let mut url = self.endpoint(&format!("investments/{}", investment_id));
        url.query_pairs_mut()
            .append_pair("user_id", &user_id.to_string());

        let resp = self.http.delete(url).send().await.map_err(|e| {
            error!(error = %e, "Failed to reach invest service");
            ApiError::RemoteOperationFailed(format!("invest service unreachable: {}", e))
        })?;

        if !resp.status().is_success() {
            return Err(super::remote_failure(resp).await);
        }

        Ok(())
    }

    fn endpoint(&self, path: &str) -> Url {
        let mut url = self.base_url.clone();
        url.set_path(path);
        url
    }
}
