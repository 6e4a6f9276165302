use crate::api::ClassifierApi;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthStatus {
    Ok,
    Unreachable,
}

/// Liveness indicator for the classification service.
///
/// Pessimistic until proven otherwise: the status starts `Unreachable` and
/// only a probe that returns 2xx with `{"status": "ok"}` flips it to `Ok`.
/// Probe failures are never surfaced beyond the boolean. Last completed
/// probe wins; concurrent refreshes are safe.
pub struct HealthController {
    api: Arc<dyn ClassifierApi>,
    healthy: AtomicBool,
}

impl HealthController {
    pub fn new(api: Arc<dyn ClassifierApi>) -> Self {
        Self {
            api,
            healthy: AtomicBool::new(false),
        }
    }

    pub async fn refresh(&self) {
        let healthy = match self.api.probe_health().await {
            Ok(reply) => reply.status.is_success() && reply.body.status.as_deref() == Some("ok"),
            Err(err) => {
                debug!("Health probe failed: {}", err);
                false
            }
        };

        debug!(healthy, "Health probe completed");
        self.healthy.store(healthy, Ordering::SeqCst);
    }

    pub fn current(&self) -> HealthStatus {
        if self.healthy.load(Ordering::SeqCst) {
            HealthStatus::Ok
        } else {
            HealthStatus::Unreachable
        }
    }
}
