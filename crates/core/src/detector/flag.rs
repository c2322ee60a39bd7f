use super::traits::Detector;
use crate::error::EvaluationFailure;
use crate::request::{ParamValue, Request};

/// Value a query parameter must carry to raise a flag.
pub const QUERY_FLAG_VALUE: &str = "1";

/// True iff the query parameter `key` is exactly `"1"`.
pub fn query_flag(request: &Request, key: &str) -> bool {
    request.query(key) == Some(QUERY_FLAG_VALUE)
}

/// True iff the route parameter `key` is the boolean `true`.
/// The string `"true"` and the integer `1` do not count.
pub fn param_flag(request: &Request, key: &str) -> bool {
    request.param(key).and_then(ParamValue::as_bool) == Some(true)
}

/// Detector of the form `query[query_key] == "1" || params[param_key] == true`.
///
/// Both built-in detectors have this shape, and projects can declare more of
/// them under `[flags.<name>]` in the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagDetector {
    name: String,
    query_key: String,
    param_key: String,
    description: String,
}

impl FlagDetector {
    pub fn new(
        name: impl Into<String>,
        query_key: impl Into<String>,
        param_key: impl Into<String>,
    ) -> Self {
        let name = name.into();
        let query_key = query_key.into();
        let param_key = param_key.into();
        let description = format!("?{query_key}=1 or route param {param_key} = true");
        Self {
            name,
            query_key,
            param_key,
            description,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn query_key(&self) -> &str {
        &self.query_key
    }

    pub fn param_key(&self) -> &str {
        &self.param_key
    }

    /// Evaluate without going through the trait; never fails.
    pub fn matches(&self, request: &Request) -> bool {
        query_flag(request, &self.query_key) || param_flag(request, &self.param_key)
    }
}

impl Detector for FlagDetector {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn detect(&self, request: &Request) -> Result<bool, EvaluationFailure> {
        Ok(self.matches(request))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn export_flag() -> FlagDetector {
        FlagDetector::new("export", "export_action", "exportAction")
    }

    #[test]
    fn test_query_flag_is_strict() {
        let det = export_flag();
        assert!(det.matches(&Request::new().with_query("export_action", "1")));
        assert!(!det.matches(&Request::new().with_query("export_action", "true")));
        assert!(!det.matches(&Request::new().with_query("export_action", " 1")));
        assert!(!det.matches(&Request::new().with_query("exportAction", "1")));
    }

    #[test]
    fn test_param_flag_requires_boolean() {
        let det = export_flag();
        assert!(det.matches(&Request::new().with_param("exportAction", true)));
        assert!(!det.matches(&Request::new().with_param("exportAction", false)));
        assert!(!det.matches(&Request::new().with_param("exportAction", "true")));
        assert!(!det.matches(&Request::new().with_param("exportAction", 1i64)));
        assert!(!det.matches(&Request::new().with_param("exportAction", ParamValue::Null)));
        assert!(!det.matches(&Request::new().with_param("exportAction", ParamValue::Float(1.0))));
        assert!(!det.matches(
            &Request::new().with_param("exportAction", ParamValue::Other(serde_json::json!([true])))
        ));
    }

    #[test]
    fn test_default_description() {
        let det = export_flag();
        assert_eq!(
            det.description(),
            "?export_action=1 or route param exportAction = true"
        );
        let det = det.with_description("Export download");
        assert_eq!(det.description(), "Export download");
    }

    #[test]
    fn test_detect_never_fails() {
        assert_eq!(export_flag().detect(&Request::new()), Ok(false));
    }
}
