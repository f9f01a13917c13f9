//! Learning plan synthesis: staged curricula and time estimates

pub mod external;
pub mod stages;

// Public exports
pub use external::validate_external_ordering;
pub use stages::{build_stages, estimate_total_time, PlanConfig, Stage, TimeEstimate};
