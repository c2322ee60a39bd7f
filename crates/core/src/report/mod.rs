pub mod types;

pub use types::{BatchFailure, BatchReport, Classification};
