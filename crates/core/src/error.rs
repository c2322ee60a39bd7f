use thiserror::Error;

/// Errors surfaced by [`DetectorRegistry`](crate::detector::DetectorRegistry) evaluation.
#[derive(Debug, Error)]
pub enum DetectError {
    /// No detector is registered under the requested name.
    #[error("unknown detector: `{0}`")]
    UnknownDetector(String),

    /// A registered detector could not decide for the given request.
    #[error("detector `{name}` could not be evaluated: {reason}")]
    DetectorEvaluation {
        name: String,
        reason: EvaluationFailure,
    },
}

impl DetectError {
    /// Name of the detector the error refers to.
    pub fn detector_name(&self) -> &str {
        match self {
            DetectError::UnknownDetector(name) => name,
            DetectError::DetectorEvaluation { name, .. } => name,
        }
    }
}

/// Per-entry failure inside a batch: either the entry never decoded into a
/// request, or classifying it failed.
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error(transparent)]
    Detect(#[from] DetectError),
}

impl BatchError {
    /// Detector involved, if the entry got as far as classification.
    pub fn detector_name(&self) -> Option<&str> {
        match self {
            BatchError::InvalidRequest(_) => None,
            BatchError::Detect(err) => Some(err.detector_name()),
        }
    }
}

/// Failure reported by a detector's predicate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct EvaluationFailure(pub String);

impl EvaluationFailure {
    pub fn new(reason: impl Into<String>) -> Self {
        Self(reason.into())
    }
}
