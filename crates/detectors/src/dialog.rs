use request_detect::detector::{param_flag, query_flag, Detector};
use request_detect::request::Request;
use request_detect::EvaluationFailure;

pub const NAME: &str = "dialog";
pub const QUERY_KEY: &str = "dialog_action";
pub const PARAM_KEY: &str = "dialogAction";

/// Detects requests for a dialog rendering of an action.
/// Raised by `?dialog_action=1` or a route param `dialogAction: true`.
pub struct Dialog;

impl Detector for Dialog {
    fn name(&self) -> &str {
        NAME
    }

    fn description(&self) -> &str {
        "Request asks for a dialog (?dialog_action=1 or route param dialogAction = true)"
    }

    fn detect(&self, request: &Request) -> Result<bool, EvaluationFailure> {
        Ok(query_flag(request, QUERY_KEY) || param_flag(request, PARAM_KEY))
    }
}
