pub mod dialog;
pub mod json_action;

/// Returns all built-in detectors
pub fn all_detectors() -> Vec<Box<dyn request_detect::detector::Detector>> {
    vec![Box::new(dialog::Dialog), Box::new(json_action::JsonAction)]
}
