//! Skill dependency graph storage and closure queries

pub mod closure;
pub mod store;

// Public exports
pub use store::{SkillGraph, SkillId, SkillKind};
