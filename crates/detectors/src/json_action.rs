use request_detect::detector::{param_flag, query_flag, Detector};
use request_detect::request::Request;
use request_detect::EvaluationFailure;

pub const NAME: &str = "jsonAction";
pub const QUERY_KEY: &str = "json_action";
pub const PARAM_KEY: &str = "jsonAction";

/// Detects action requests that expect a JSON response.
pub struct JsonAction;

impl Detector for JsonAction {
    fn name(&self) -> &str {
        NAME
    }

    fn description(&self) -> &str {
        "Request expects a JSON action response (?json_action=1 or route param jsonAction = true)"
    }

    fn detect(&self, request: &Request) -> Result<bool, EvaluationFailure> {
        Ok(query_flag(request, QUERY_KEY) || param_flag(request, PARAM_KEY))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detect(request: Request) -> bool {
        JsonAction.detect(&request).unwrap()
    }

    #[test]
    fn test_query_flag() {
        let req = Request::new()
            .with_query("json_action", "1")
            .with_param("dialogAction", true);
        assert!(detect(req));
    }

    #[test]
    fn test_param_flag() {
        assert!(detect(Request::new().with_param("jsonAction", true)));
    }

    #[test]
    fn test_string_param_does_not_match() {
        assert!(!detect(Request::new().with_param("jsonAction", "1")));
    }

    #[test]
    fn test_query_other_values_do_not_match() {
        for value in ["0", "true", "yes", "", "01"] {
            assert!(
                !detect(Request::new().with_query("json_action", value)),
                "json_action={value:?} should not match"
            );
        }
    }

    #[test]
    fn test_dialog_keys_ignored() {
        let req = Request::new()
            .with_query("dialog_action", "1")
            .with_param("dialogAction", true);
        assert!(!detect(req));
    }
}
