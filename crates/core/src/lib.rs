pub mod config;
pub mod detector;
pub mod error;
pub mod report;
pub mod request;

pub use error::{BatchError, DetectError, EvaluationFailure};
