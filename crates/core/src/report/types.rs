use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::BatchError;

/// Outcome of running every registered detector against one request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Classification {
    /// Names of the detectors that matched, sorted
    pub matched: Vec<String>,
    /// Number of detectors evaluated
    pub evaluated: usize,
}

impl Classification {
    /// Whether the named detector matched
    pub fn is(&self, name: &str) -> bool {
        self.matched.iter().any(|m| m == name)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchFailure {
    /// Zero-based position of the request in the batch
    pub index: usize,
    /// Absent when the entry could not be decoded into a request
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detector: Option<String>,
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct BatchReport {
    pub total_requests: usize,
    pub classified_requests: usize,
    pub matched_requests: usize,
    pub matches_by_detector: BTreeMap<String, usize>,
    pub classifications: Vec<Option<Classification>>,
    pub failures: Vec<BatchFailure>,
}

impl BatchReport {
    /// Aggregate per-request results. `detectors` seeds the per-detector
    /// counts so detectors that never matched still show up with zero.
    pub fn from_results<E>(detectors: &[&str], results: Vec<Result<Classification, E>>) -> Self
    where
        E: Into<BatchError>,
    {
        let mut matches_by_detector: BTreeMap<String, usize> =
            detectors.iter().map(|d| (d.to_string(), 0)).collect();
        let mut classifications = Vec::with_capacity(results.len());
        let mut failures = Vec::new();

        for (index, result) in results.into_iter().enumerate() {
            match result {
                Ok(classification) => {
                    for name in &classification.matched {
                        *matches_by_detector.entry(name.clone()).or_insert(0) += 1;
                    }
                    classifications.push(Some(classification));
                }
                Err(err) => {
                    let err: BatchError = err.into();
                    failures.push(BatchFailure {
                        index,
                        detector: err.detector_name().map(str::to_string),
                        error: err.to_string(),
                    });
                    classifications.push(None);
                }
            }
        }

        let classified = classifications.iter().filter(|c| c.is_some()).count();
        let matched = classifications
            .iter()
            .flatten()
            .filter(|c| !c.matched.is_empty())
            .count();

        Self {
            total_requests: classifications.len(),
            classified_requests: classified,
            matched_requests: matched,
            matches_by_detector,
            classifications,
            failures,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{DetectError, EvaluationFailure};

    fn classified(matched: &[&str]) -> Result<Classification, BatchError> {
        Ok(Classification {
            matched: matched.iter().map(|m| m.to_string()).collect(),
            evaluated: 2,
        })
    }

    #[test]
    fn test_counts() {
        let results = vec![
            classified(&["dialog"]),
            classified(&["dialog", "jsonAction"]),
            classified(&[]),
            Err(DetectError::DetectorEvaluation {
                name: "jsonAction".to_string(),
                reason: EvaluationFailure::new("bad"),
            }
            .into()),
        ];
        let report = BatchReport::from_results(&["dialog", "jsonAction", "export"], results);

        assert_eq!(report.total_requests, 4);
        assert_eq!(report.classified_requests, 3);
        assert_eq!(report.matched_requests, 2);
        assert_eq!(report.matches_by_detector["dialog"], 2);
        assert_eq!(report.matches_by_detector["jsonAction"], 1);
        assert_eq!(report.matches_by_detector["export"], 0);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].index, 3);
        assert_eq!(report.failures[0].detector.as_deref(), Some("jsonAction"));
        assert!(report.classifications[3].is_none());
    }

    #[test]
    fn test_invalid_entry_is_a_failure() {
        let results = vec![
            classified(&["dialog"]),
            Err(BatchError::InvalidRequest("line 2: expected value".to_string())),
            classified(&[]),
        ];
        let report = BatchReport::from_results(&["dialog"], results);

        assert_eq!(report.total_requests, 3);
        assert_eq!(report.classified_requests, 2);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].index, 1);
        assert_eq!(report.failures[0].detector, None);
        assert_eq!(report.failures[0].error, "invalid request: line 2: expected value");

        let json = serde_json::to_value(&report).unwrap();
        assert!(json["failures"][0].get("detector").is_none());
    }

    #[test]
    fn test_serializes_to_json() {
        let report = BatchReport::from_results(&["dialog"], vec![classified(&["dialog"])]);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["total_requests"], 1);
        assert_eq!(json["matches_by_detector"]["dialog"], 1);
        assert_eq!(json["classifications"][0]["matched"][0], "dialog");
    }
}
