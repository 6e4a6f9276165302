use std::fmt;
use thiserror::Error;

/// Rendered in place of a missing or blank label so the result stays
/// informative.
pub const MISSING_LABEL: &str = "<none>";

/// Canonical three-way classification outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Real,
    Fake,
    /// The service answered with a label outside the recognized vocabulary.
    /// Not an error; the original label is carried for display.
    Unknown(String),
}

impl Verdict {
    /// Normalizes the service's free-form label.
    ///
    /// Matching is whitespace-trimmed and case-insensitive. The vocabulary is
    /// intentionally small: `true`/`real`/`genuine` mean real,
    /// `fake`/`false` mean fake, everything else is unknown.
    pub fn from_label(raw: Option<&str>) -> Self {
        let raw = raw.unwrap_or_default();

        match raw.trim().to_lowercase().as_str() {
            "true" | "real" | "genuine" => Verdict::Real,
            "fake" | "false" => Verdict::Fake,
            "" => Verdict::Unknown(MISSING_LABEL.to_string()),
            _ => Verdict::Unknown(raw.to_string()),
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Real => write!(f, "REAL"),
            Verdict::Fake => write!(f, "FAKE"),
            Verdict::Unknown(label) => write!(f, "Prediction: {}", label),
        }
    }
}

/// Why a classification request failed. Distinct from an unknown verdict,
/// which is a successful result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PredictionError {
    /// The service responded with a non-2xx status.
    #[error("Error: {message}")]
    Http { status: u16, message: String },

    /// The request never completed: connection failure, DNS failure, or an
    /// unparseable body.
    #[error("Network error")]
    Network,
}

/// Terminal result of one classification request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PredictionOutcome {
    Success {
        verdict: Verdict,
        note: Option<String>,
    },
    Failure(PredictionError),
}

/// Request lifecycle. Exactly one value is live at any time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestState {
    Idle,
    Submitting,
    Settled(PredictionOutcome),
}
