use crate::error::EvaluationFailure;
use crate::request::Request;

/// Core trait for all request detectors.
/// Implementors classify a request by answering a single yes/no question.
pub trait Detector: Send + Sync {
    /// Unique identifier for this detector (e.g., "dialog")
    fn name(&self) -> &str;

    /// Human-readable description of what this detector checks
    fn description(&self) -> &str;

    /// Decide whether the request matches. Must not touch anything but `request`.
    fn detect(&self, request: &Request) -> Result<bool, EvaluationFailure>;
}

/// Adapter that turns a plain predicate into a named [`Detector`].
pub struct FnDetector<F> {
    name: String,
    predicate: F,
}

impl<F> FnDetector<F>
where
    F: Fn(&Request) -> Result<bool, EvaluationFailure> + Send + Sync,
{
    pub fn new(name: impl Into<String>, predicate: F) -> Self {
        Self {
            name: name.into(),
            predicate,
        }
    }
}

impl<F> Detector for FnDetector<F>
where
    F: Fn(&Request) -> Result<bool, EvaluationFailure> + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        "Ad hoc predicate"
    }

    fn detect(&self, request: &Request) -> Result<bool, EvaluationFailure> {
        (self.predicate)(request)
    }
}
