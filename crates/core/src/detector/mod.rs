pub mod flag;
pub mod registry;
pub mod traits;

pub use flag::{param_flag, query_flag, FlagDetector};
pub use registry::DetectorRegistry;
pub use traits::{Detector, FnDetector};
