use super::types::{PredictionError, PredictionOutcome, RequestState, Verdict};
use crate::api::{ApiResponse, ClassifierApi, PredictBody};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, warn};

struct Inner {
    text: String,
    state: RequestState,
    /// Identifies the current request. Bumped by every accepted `submit` and
    /// every `clear`; a response whose generation no longer matches is stale
    /// and must not be applied.
    generation: u64,
}

/// Owns the submitted text and the request state machine:
/// `Idle -> Submitting -> Settled(outcome)`, re-entering `Submitting` on the
/// next submission or returning to `Idle` on [`PredictionController::clear`].
pub struct PredictionController {
    api: Arc<dyn ClassifierApi>,
    inner: Mutex<Inner>,
}

impl PredictionController {
    pub fn new(api: Arc<dyn ClassifierApi>) -> Self {
        Self {
            api,
            inner: Mutex::new(Inner {
                text: String::new(),
                state: RequestState::Idle,
                generation: 0,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Submits `text` for classification and drives the request to
    /// completion. A call made while another request is in flight is a
    /// no-op; a response arriving after `clear` or a later submission is
    /// discarded.
    pub async fn submit(&self, text: impl Into<String>) {
        let text = text.into();

        let generation = {
            let mut inner = self.lock();
            if inner.state == RequestState::Submitting {
                warn!("Ignoring submit: a prediction request is already in flight");
                return;
            }
            inner.generation += 1;
            inner.text = text.clone();
            // Entering Submitting drops any prior outcome so observers see a
            // pending request, not stale data.
            inner.state = RequestState::Submitting;
            inner.generation
        };

        debug!(generation, "Submitting prediction request");

        let result = self.api.classify(&text).await;

        let mut inner = self.lock();
        if inner.generation != generation {
            debug!(
                generation,
                current = inner.generation,
                "Discarding response for superseded prediction request"
            );
            return;
        }

        let outcome = match result {
            Ok(reply) => Self::settle(reply),
            Err(err) => {
                warn!("Prediction request failed at transport level: {}", err);
                PredictionOutcome::Failure(PredictionError::Network)
            }
        };

        info!(generation, ?outcome, "Prediction request settled");
        inner.state = RequestState::Settled(outcome);
    }

    fn settle(reply: ApiResponse<PredictBody>) -> PredictionOutcome {
        let ApiResponse { status, body } = reply;

        if !status.is_success() {
            let message = body.error.unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("unexpected status")
                    .to_string()
            });
            return PredictionOutcome::Failure(PredictionError::Http {
                status: status.as_u16(),
                message,
            });
        }

        let verdict = Verdict::from_label(body.prediction.as_deref());
        let note = body.note.filter(|note| !note.is_empty());

        PredictionOutcome::Success { verdict, note }
    }

    /// Resets to `Idle` with empty text, from any state. An in-flight request
    /// is not aborted, but its eventual response is invalidated.
    pub fn clear(&self) {
        let mut inner = self.lock();
        inner.generation += 1;
        inner.text.clear();
        inner.state = RequestState::Idle;
        debug!("Prediction state cleared");
    }

    pub fn current_state(&self) -> RequestState {
        self.lock().state.clone()
    }

    pub fn current_text(&self) -> String {
        self.lock().text.clone()
    }
}
