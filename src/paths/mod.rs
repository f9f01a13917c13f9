//! Shortest learning path search over the skill graph

pub mod finder;

// Public exports
pub use finder::{LearningPath, PathFinder};
