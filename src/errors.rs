//! Error types for the skill path engine

use thiserror::Error;

use crate::graph::SkillId;

/// Main error type for skill path operations
#[derive(Error, Debug)]
pub enum SkillPathError {
    /// Closure or metadata query on a skill absent from the graph
    #[error("Unknown skill: {0}")]
    UnknownSkill(SkillId),

    /// Empty current/target skill lists or unresolvable roles
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// No learning route from the known skills to a target.
    ///
    /// Not a system fault: it means the full prerequisite chain must be
    /// learned from scratch.
    #[error("No path found: {0}")]
    NotFound(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic IO errors (graph export/import files)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for skill path operations
pub type Result<T> = std::result::Result<T, SkillPathError>;
