//! Staged curriculum synthesis
//!
//! Turns a flattened, deduplicated skill sequence into time-boxed stages
//! with per-skill milestones, plus a total-duration estimate. Stages are
//! derived, never stored: they are recomputed on every plan request.

use serde::{Deserialize, Serialize};

use crate::graph::SkillId;

/// Tunables for stage synthesis and time estimation
#[derive(Clone, Debug)]
pub struct PlanConfig {
    /// Study weeks allotted per skill (default: 2)
    pub weeks_per_skill: usize,
    /// Upper bound on the number of stages (default: 4)
    pub max_stages: usize,
    /// Assumed study hours per week (default: 10)
    pub study_hours_per_week: usize,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            weeks_per_skill: 2,
            max_stages: 4,
            study_hours_per_week: 10,
        }
    }
}

/// A time-boxed batch of skills within a learning plan
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Stage {
    /// 1-based position in the plan
    pub stage_number: usize,
    pub skills: Vec<SkillId>,
    pub estimated_weeks: usize,
    /// One milestone string per skill
    pub milestones: Vec<String>,
}

/// Total-duration estimate for a flattened skill path
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimeEstimate {
    pub total_weeks: usize,
    /// Weeks divided by four, rounded to one decimal
    pub total_months: f64,
    pub study_hours_per_week: usize,
    pub total_study_hours: usize,
}

/// Partition a flattened skill path into at most `max_stages` stages
///
/// Deterministic fixed-width chunking: the stage width is
/// `max(1, n / max_stages)` and the final stage absorbs any remainder, so
/// later stages may be longer than earlier ones. Lists shorter than the
/// stage bound produce one single-skill stage per entry. Empty input yields
/// an empty stage list.
pub fn build_stages(path: &[SkillId], config: &PlanConfig) -> Vec<Stage> {
    if path.is_empty() {
        return Vec::new();
    }

    let width = std::cmp::max(1, path.len() / config.max_stages);
    let mut stages = Vec::new();
    let mut start = 0;
    while start < path.len() {
        let end = if stages.len() + 1 == config.max_stages {
            path.len()
        } else {
            (start + width).min(path.len())
        };
        let skills: Vec<SkillId> = path[start..end].to_vec();
        let milestones = skills
            .iter()
            .map(|s| format!("complete fundamentals of {}", s))
            .collect();
        stages.push(Stage {
            stage_number: stages.len() + 1,
            estimated_weeks: skills.len() * config.weeks_per_skill,
            skills,
            milestones,
        });
        start = end;
    }
    stages
}

/// Estimate the total time needed to work through a flattened skill path
pub fn estimate_total_time(path: &[SkillId], config: &PlanConfig) -> TimeEstimate {
    let total_weeks = path.len() * config.weeks_per_skill;
    let total_months = (total_weeks as f64 / 4.0 * 10.0).round() / 10.0;
    TimeEstimate {
        total_weeks,
        total_months,
        study_hours_per_week: config.study_hours_per_week,
        total_study_hours: total_weeks * config.study_hours_per_week,
    }
}
