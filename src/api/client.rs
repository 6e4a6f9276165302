use super::types::*;
use crate::config::ApiConfig;
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use tracing::debug;

/// Sole owner of outbound calls to the classification service.
#[async_trait]
pub trait ClassifierApi: Send + Sync {
    /// Submits `text` for classification.
    ///
    /// Succeeds with the parsed body for ANY HTTP status, since the service
    /// returns structured error payloads on non-2xx; callers inspect
    /// [`ApiResponse::status`]. Fails only when the request cannot complete
    /// (connection/DNS failure, unparseable body).
    async fn classify(&self, text: &str) -> ApiResult<ApiResponse<PredictBody>>;

    /// Probes the service's health endpoint. Same success/failure split as
    /// [`ClassifierApi::classify`].
    async fn probe_health(&self) -> ApiResult<ApiResponse<HealthBody>>;
}

pub struct HttpClassifierApi {
    base_url: String,
    client: reqwest::Client,
}

impl HttpClassifierApi {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl ClassifierApi for HttpClassifierApi {
    async fn classify(&self, text: &str) -> ApiResult<ApiResponse<PredictBody>> {
        debug!("POST /predict with {} bytes of text", text.len());

        let response = self
            .client
            .post(format!("{}/predict", self.base_url))
            .header(ACCEPT, "application/json")
            .json(&PredictRequest {
                text: text.to_string(),
            })
            .send()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;

        let status = response.status();
        let body: PredictBody = response
            .json()
            .await
            .map_err(|e| TransportError::Body(e.to_string()))?;

        debug!("Classification response arrived with status {}", status);

        Ok(ApiResponse { status, body })
    }

    async fn probe_health(&self) -> ApiResult<ApiResponse<HealthBody>> {
        debug!("GET /health");

        let response = self
            .client
            .get(format!("{}/health", self.base_url))
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;

        let status = response.status();
        let body: HealthBody = response
            .json()
            .await
            .map_err(|e| TransportError::Body(e.to_string()))?;

        Ok(ApiResponse { status, body })
    }
}
