pub mod query;
pub mod types;

pub use types::{ParamValue, Request};
