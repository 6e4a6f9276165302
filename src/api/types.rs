use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type ApiResult<T> = std::result::Result<T, TransportError>;

/// Failure to complete a request at all. An HTTP error status is NOT a
/// transport error; the status travels back inside [`ApiResponse`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("malformed response body: {0}")]
    Body(String),
}

/// Parsed response body together with the HTTP status it arrived under.
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    pub status: StatusCode,
    pub body: T,
}

#[derive(Debug, Clone, Serialize)]
pub struct PredictRequest {
    pub text: String,
}

/// Raw `/predict` payload. The service is loose about which fields it sends:
/// successes carry `prediction` (and sometimes `note`), error statuses carry
/// `error`, and any of them may be missing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PredictBody {
    pub prediction: Option<String>,
    pub note: Option<String>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HealthBody {
    pub status: Option<String>,
}
