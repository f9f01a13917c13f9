//! Skill Dependency Reasoning Engine
//!
//! Recommends the sequence of skills a person must learn to reach a target
//! role, given their current skills:
//! - Prerequisite closures over a curated skill dependency graph
//! - Multi-source shortest learning paths
//! - Staged, time-estimated curricula

// Module declarations
pub mod errors;
pub mod export_import;
pub mod gaps;
pub mod graph;
pub mod paths;
pub mod plan;
pub mod roles;
pub mod seed;
pub mod service;

// Re-export main types
pub use errors::{Result, SkillPathError};

pub use graph::{SkillGraph, SkillId, SkillKind};

pub use paths::{LearningPath, PathFinder};

pub use gaps::{format_duration, GapAnalyzer, GapReport};

pub use plan::{
    build_stages, estimate_total_time, validate_external_ordering, PlanConfig, Stage, TimeEstimate,
};

pub use roles::RoleMapper;

pub use seed::{default_roles, seed_graph};

pub use export_import::{
    export_graph, export_graph_to_file, import_graph, import_graph_from_file, GraphExport,
    NodeExport,
};

pub use service::{
    LearningPlan, PlanId, PlanSource, SkillDependencyReport, SkillPathService,
};

/// Version of the skill path engine crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the engine (logs the crate version)
pub fn init() {
    tracing::info!("SkillForge engine v{}", VERSION);
}
