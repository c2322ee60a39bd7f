use std::collections::BTreeMap;

use rayon::prelude::*;
use tracing::{debug, trace, warn};

use super::traits::{Detector, FnDetector};
use crate::error::{BatchError, DetectError, EvaluationFailure};
use crate::report::Classification;
use crate::request::Request;

/// Registry that holds all detectors by name and evaluates them against requests.
///
/// Built once at startup and then only read, so a shared reference can be
/// handed to any number of request-handling threads.
pub struct DetectorRegistry {
    detectors: BTreeMap<String, Box<dyn Detector>>,
}

impl DetectorRegistry {
    pub fn new() -> Self {
        Self {
            detectors: BTreeMap::new(),
        }
    }

    /// Register a detector. A detector already registered under the same
    /// name is replaced.
    pub fn register(&mut self, detector: Box<dyn Detector>) {
        let name = detector.name().to_string();
        if name.is_empty() {
            warn!("registering detector with an empty name");
        }
        if self.detectors.insert(name.clone(), detector).is_some() {
            debug!(detector = %name, "replaced previously registered detector");
        } else {
            debug!(detector = %name, "registered detector");
        }
    }

    /// Register a plain predicate under `name`
    pub fn register_fn<F>(&mut self, name: impl Into<String>, predicate: F)
    where
        F: Fn(&Request) -> Result<bool, EvaluationFailure> + Send + Sync + 'static,
    {
        self.register(Box::new(FnDetector::new(name, predicate)));
    }

    /// Register multiple detectors at once, in order
    pub fn register_all(&mut self, detectors: Vec<Box<dyn Detector>>) {
        for detector in detectors {
            self.register(detector);
        }
    }

    /// Evaluate the detector registered under `name` against `request`.
    pub fn evaluate(&self, name: &str, request: &Request) -> Result<bool, DetectError> {
        let detector = self
            .detectors
            .get(name)
            .ok_or_else(|| DetectError::UnknownDetector(name.to_string()))?;

        match detector.detect(request) {
            Ok(matched) => {
                trace!(detector = name, matched, "evaluated detector");
                Ok(matched)
            }
            Err(reason) => {
                warn!(detector = name, %reason, "detector evaluation failed");
                Err(DetectError::DetectorEvaluation {
                    name: name.to_string(),
                    reason,
                })
            }
        }
    }

    /// Run every registered detector, in name order, and collect those that matched.
    /// Stops at the first detector that fails.
    pub fn classify(&self, request: &Request) -> Result<Classification, DetectError> {
        let mut matched = Vec::new();
        for name in self.detectors.keys() {
            if self.evaluate(name, request)? {
                matched.push(name.clone());
            }
        }
        Ok(Classification {
            matched,
            evaluated: self.detectors.len(),
        })
    }

    /// Classify many requests in parallel. Results keep the input order.
    pub fn classify_batch(&self, requests: &[Request]) -> Vec<Result<Classification, DetectError>> {
        requests.par_iter().map(|r| self.classify(r)).collect()
    }

    /// Like [`classify_batch`](Self::classify_batch), for entries that may have
    /// failed to decode. Failed entries pass through in place.
    pub fn classify_decoded(
        &self,
        entries: Vec<Result<Request, BatchError>>,
    ) -> Vec<Result<Classification, BatchError>> {
        entries
            .into_par_iter()
            .map(|entry| match entry {
                Ok(request) => self.classify(&request).map_err(BatchError::from),
                Err(err) => Err(err),
            })
            .collect()
    }

    /// List all registered detector names, sorted
    pub fn list_detectors(&self) -> Vec<&str> {
        self.detectors.keys().map(|k| k.as_str()).collect()
    }

    /// Iterate registered detectors in name order
    pub fn detectors(&self) -> impl Iterator<Item = &dyn Detector> {
        self.detectors.values().map(|d| d.as_ref() as &dyn Detector)
    }

    pub fn get(&self, name: &str) -> Option<&dyn Detector> {
        self.detectors.get(name).map(|d| d.as_ref() as &dyn Detector)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.detectors.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.detectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.detectors.is_empty()
    }
}

impl Default for DetectorRegistry {
    fn default() -> Self {
        Self::new()
    }
}
