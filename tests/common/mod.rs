#![allow(dead_code)]

use async_trait::async_trait;
use newscheck::api::{
    ApiResponse, ApiResult, ClassifierApi, HealthBody, PredictBody, TransportError,
};
use reqwest::StatusCode;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::Semaphore;

/// Scripted stand-in for the HTTP boundary client.
///
/// Replies are handed out in FIFO order. When constructed with a gate,
/// classify calls block until a permit is added, which lets tests hold a
/// request "in flight" deliberately.
pub struct MockClassifierApi {
    classify_replies: Mutex<VecDeque<ApiResult<ApiResponse<PredictBody>>>>,
    health_replies: Mutex<VecDeque<ApiResult<ApiResponse<HealthBody>>>>,
    classify_calls: Mutex<Vec<String>>,
    gate: Option<Arc<Semaphore>>,
}

impl MockClassifierApi {
    pub fn new() -> Self {
        Self {
            classify_replies: Mutex::new(VecDeque::new()),
            health_replies: Mutex::new(VecDeque::new()),
            classify_calls: Mutex::new(Vec::new()),
            gate: None,
        }
    }

    pub fn gated(gate: Arc<Semaphore>) -> Self {
        Self {
            gate: Some(gate),
            ..Self::new()
        }
    }

    pub fn with_classify_reply(self, status: u16, body: PredictBody) -> Self {
        self.classify_replies
            .lock()
            .unwrap()
            .push_back(Ok(ApiResponse {
                status: status_code(status),
                body,
            }));
        self
    }

    pub fn with_classify_failure(self, err: TransportError) -> Self {
        self.classify_replies.lock().unwrap().push_back(Err(err));
        self
    }

    pub fn with_health_reply(self, status: u16, body: HealthBody) -> Self {
        self.health_replies
            .lock()
            .unwrap()
            .push_back(Ok(ApiResponse {
                status: status_code(status),
                body,
            }));
        self
    }

    pub fn with_health_failure(self) -> Self {
        self.health_replies
            .lock()
            .unwrap()
            .push_back(Err(TransportError::Request(
                "connection refused".to_string(),
            )));
        self
    }

    pub fn classify_calls(&self) -> Vec<String> {
        self.classify_calls.lock().unwrap().clone()
    }
}

impl Default for MockClassifierApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ClassifierApi for MockClassifierApi {
    async fn classify(&self, text: &str) -> ApiResult<ApiResponse<PredictBody>> {
        self.classify_calls.lock().unwrap().push(text.to_string());

        if let Some(gate) = &self.gate {
            gate.acquire().await.expect("gate closed").forget();
        }

        self.classify_replies
            .lock()
            .unwrap()
            .pop_front()
            .expect("no scripted classify reply left")
    }

    async fn probe_health(&self) -> ApiResult<ApiResponse<HealthBody>> {
        self.health_replies
            .lock()
            .unwrap()
            .pop_front()
            .expect("no scripted health reply left")
    }
}

fn status_code(status: u16) -> StatusCode {
    StatusCode::from_u16(status).expect("valid status code")
}

// Helper functions for creating test payloads

pub fn prediction_body(label: &str) -> PredictBody {
    PredictBody {
        prediction: Some(label.to_string()),
        ..Default::default()
    }
}

pub fn prediction_body_with_note(label: &str, note: &str) -> PredictBody {
    PredictBody {
        prediction: Some(label.to_string()),
        note: Some(note.to_string()),
        ..Default::default()
    }
}

pub fn error_body(message: &str) -> PredictBody {
    PredictBody {
        error: Some(message.to_string()),
        ..Default::default()
    }
}

pub fn health_body(status: &str) -> HealthBody {
    HealthBody {
        status: Some(status.to_string()),
    }
}
