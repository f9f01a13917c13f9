//! Skill gap analysis
//!
//! Given a learner's current skills and a target skill set, determines which
//! target skills are missing and computes an independent shortest learning
//! route for each one. Per-skill routes are flattened into a single
//! order-preserving, duplicate-free sequence: a shared prerequisite is
//! learned once and credited to every skill that needed it.

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

use crate::errors::{Result, SkillPathError};
use crate::graph::{SkillGraph, SkillId};
use crate::paths::{LearningPath, PathFinder};

/// Weeks of study assumed per hop in a learning route
const WEEKS_PER_HOP: usize = 2;

/// Result of a gap analysis
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GapReport {
    /// Target skills the learner lacks, in requested order
    pub missing_skills: Vec<SkillId>,
    /// Shortest route per missing skill, keyed by skill id
    pub routes: IndexMap<SkillId, LearningPath>,
    /// Missing skills with no route from the current skills; these require
    /// the full prerequisite chain learned from scratch
    pub unreachable: Vec<SkillId>,
    /// All route steps concatenated in request order, first occurrence kept
    pub flattened_path: Vec<SkillId>,
    /// True when every target skill is already held
    pub already_satisfied: bool,
    /// Sum of per-route hop counts. Shared prerequisites are deliberately
    /// double-counted: each target's route is costed independently.
    pub total_hops: usize,
    /// Human-readable duration derived from `total_hops`
    pub estimated_duration: String,
}

/// Gap analyzer over an immutable skill graph
pub struct GapAnalyzer<'g> {
    graph: &'g SkillGraph,
}

impl<'g> GapAnalyzer<'g> {
    pub fn new(graph: &'g SkillGraph) -> Self {
        Self { graph }
    }

    /// Analyze the gap between `current_skills` and `target_skills`
    ///
    /// Fails with `InvalidInput` when either list is empty. A `NotFound`
    /// route for one skill does not abort the others; it is collected into
    /// `unreachable` so the caller sees which specific skills have no
    /// learning route.
    pub fn analyze(
        &self,
        current_skills: &[SkillId],
        target_skills: &[SkillId],
    ) -> Result<GapReport> {
        if current_skills.is_empty() || target_skills.is_empty() {
            return Err(SkillPathError::InvalidInput(
                "both current and target skills are required".to_string(),
            ));
        }

        let current: IndexSet<&SkillId> = current_skills.iter().collect();
        let missing_skills: Vec<SkillId> = target_skills
            .iter()
            .filter(|s| !current.contains(*s))
            .cloned()
            .collect::<IndexSet<_>>()
            .into_iter()
            .collect();

        if missing_skills.is_empty() {
            tracing::debug!("all target skills already held");
            return Ok(GapReport {
                missing_skills,
                routes: IndexMap::new(),
                unreachable: Vec::new(),
                flattened_path: Vec::new(),
                already_satisfied: true,
                total_hops: 0,
                estimated_duration: format_duration(0),
            });
        }

        let finder = PathFinder::new(self.graph);
        let mut routes = IndexMap::new();
        let mut unreachable = Vec::new();
        for skill in &missing_skills {
            match finder.find_path(current_skills, skill) {
                Ok(path) => {
                    routes.insert(skill.clone(), path);
                }
                Err(SkillPathError::NotFound(_)) => unreachable.push(skill.clone()),
                Err(e) => return Err(e),
            }
        }

        let flattened_path: Vec<SkillId> = routes
            .values()
            .flat_map(|p| p.steps.iter().cloned())
            .collect::<IndexSet<_>>()
            .into_iter()
            .collect();

        let total_hops: usize = routes.values().map(|p| p.length).sum();
        let estimated_duration = format_duration(total_hops * WEEKS_PER_HOP);

        tracing::debug!(
            missing = missing_skills.len(),
            unreachable = unreachable.len(),
            total_hops,
            "gap analysis complete"
        );

        Ok(GapReport {
            missing_skills,
            routes,
            unreachable,
            flattened_path,
            already_satisfied: false,
            total_hops,
            estimated_duration,
        })
    }
}

/// Render a week count as weeks, months, or years
///
/// Weeks up to 8 stay in weeks, up to 24 become months (weeks/4), anything
/// longer becomes years (weeks/52). Both conversions floor.
pub fn format_duration(total_weeks: usize) -> String {
    if total_weeks <= 8 {
        format!("{} weeks", total_weeks)
    } else if total_weeks <= 24 {
        format!("{} months", total_weeks / 4)
    } else {
        format!("{} year(s)", total_weeks / 52)
    }
}
