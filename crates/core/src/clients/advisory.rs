use moneta_primitives::error::ApiError;
use moneta_primitives::models::dtos::advisory_dto::{
    CreateSessionRequest, RescheduleSessionRequest, SessionRecord,
};
use reqwest::{Client, Url};
use tracing::error;
use uuid::Uuid;

/// Client for the advisory service.
#[derive(Clone)]
pub struct AdvisoryClient {
    http: Client,
    base_url: Url,
}

impl AdvisoryClient {
    pub fn new(http: Client, base_url: &str) -> Result<Self, ApiError> {
        let base_url = Url::parse(base_url)
            .map_err(|_| ApiError::Internal("Invalid advisory service base URL".into()))?;

        Ok(Self { http, base_url })
    }

    pub async fn book(&self, payload: &CreateSessionRequest) -> Result<SessionRecord, ApiError> {
        let url = self.endpoint("sessions");

        let resp = self
            .http
            .post(url)
            .json(payload)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to reach advisory service");
                ApiError::RemoteOperationFailed(format!("advisory service unreachable: {}", e))
            })?;

        if !resp.status().is_success() {
            return Err(super::remote_failure(resp).await);
        }

        resp.json::<SessionRecord>().await.map_err(|e| {
            error!(error = %e, "Invalid advisory service response");
            ApiError::RemoteOperationFailed("invalid advisory service response".into())
        })
    }

    pub async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<SessionRecord>, ApiError> {
        let mut url = self.endpoint("sessions");
        url.query_pairs_mut()
            .append_pair("user_id", &user_id.to_string());

        let resp = self.http.get(url).send().await.map_err(|e| {
            error!(error = %e, "Failed to reach advisory service");
            ApiError::RemoteOperationFailed(format!("advisory service unreachable: {}", e))
        })?;

        if !resp.status().is_success() {
            return Err(super::remote_failure(resp).await);
        }

        resp.json::<Vec<SessionRecord>>().await.map_err(|e| {
            error!(error = %e, "Invalid advisory service response");
            ApiError::RemoteOperationFailed("invalid advisory service response".into())
        })
    }

    pub async fn reschedule(
        &self,
        session_id: Uuid,
        user_id: Uuid,
        payload: &RescheduleSessionRequest,
    ) -> Result<SessionRecord, ApiError> {
        let mut url = self.endpoint(&format!("sessions/{}", session_id));
        url.query_pairs_mut()
            .append_pair("user_id", &user_id.to_string());

        let resp = self
            .http
            .put(url)
            .json(payload)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to reach advisory service");
                ApiError::RemoteOperationFailed(format!("advisory service unreachable: {}", e))
            })?;

        if !resp.status().is_success() {
            return Err(super::remote_failure(resp).await);
        }

        resp.json::<SessionRecord>().await.map_err(|e| {
            error!(error = %e, "Invalid advisory service response");
            ApiError::RemoteOperationFailed("invalid advisory service response".into())
        })
    }

    pub async fn cancel(&self, session_id: Uuid, user_id: Uuid) -> Result<(), ApiError> {
        let mut url = self.endpoint(&format!("sessions/{}", session_id));
        url.query_pairs_mut()
            .append_pair("user_id", &user_id.to_string());

        let resp = self.http.delete(url).send().await.map_err(|e| {
            error!(error = %e, "Failed to reach advisory service");
            ApiError::RemoteOperationFailed(format!("advisory service unreachable: {}", e))
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
