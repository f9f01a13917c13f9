//! Skill gap analysis between current and target skill sets

pub mod analyzer;

// Public exports
pub use analyzer::{format_duration, GapAnalyzer, GapReport};
