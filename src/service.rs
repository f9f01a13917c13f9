//! High-level recommendation service
//!
//! Ties the graph store, gap analyzer, plan synthesizer, and role mapper
//! together behind one facade. Consumers expose these queries over whatever
//! transport they like; the service itself has no wire protocol. All query
//! methods take `&self` and are safe for unlimited parallel invocation once
//! construction is done.

use chrono::{DateTime, Utc};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, SkillPathError};
use crate::gaps::{GapAnalyzer, GapReport};
use crate::graph::{SkillGraph, SkillId, SkillKind};
use crate::plan::{
    build_stages, estimate_total_time, validate_external_ordering, PlanConfig, Stage, TimeEstimate,
};
use crate::roles::RoleMapper;
use crate::seed;

/// Unique identifier for a synthesized learning plan
///
/// UUID v4 wrapper; stamped on every plan so downstream consumers can
/// correlate logs and responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlanId(uuid::Uuid);

impl PlanId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for PlanId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for PlanId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where the plan's skill ordering came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanSource {
    /// Deterministic ordering produced by the graph engine
    Engine,
    /// Ordering proposed by an external collaborator and validated against
    /// the engine's required-skill set
    External,
}

/// A complete synthesized learning plan
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LearningPlan {
    pub plan_id: PlanId,
    pub generated_at: DateTime<Utc>,
    pub current_skills: Vec<SkillId>,
    pub target_skills: Vec<SkillId>,
    /// The skill ordering the stages were built from
    pub learning_path: Vec<SkillId>,
    pub gap: GapReport,
    pub stages: Vec<Stage>,
    pub estimate: TimeEstimate,
    pub source: PlanSource,
}

/// Per-skill dependency metadata
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SkillDependencyReport {
    pub skill: SkillId,
    pub kind: SkillKind,
    /// Transitive prerequisite closure (unordered)
    pub prerequisites: IndexSet<SkillId>,
    /// Transitive dependents (unordered)
    pub dependents: IndexSet<SkillId>,
    pub in_degree: usize,
    pub out_degree: usize,
}

/// Facade over the skill dependency reasoning engine
pub struct SkillPathService {
    graph: SkillGraph,
    roles: RoleMapper,
    config: PlanConfig,
}

impl SkillPathService {
    /// Create a service over an already-seeded graph and role table
    pub fn new(graph: SkillGraph, roles: RoleMapper) -> Self {
        tracing::info!(
            skills = graph.len(),
            roles = roles.len(),
            "skill path service ready"
        );
        Self {
            graph,
            roles,
            config: PlanConfig::default(),
        }
    }

    /// Create a service over the curated seed data
    pub fn with_seed_data() -> Self {
        Self::new(seed::seed_graph(), seed::default_roles())
    }

    /// Set custom plan configuration (builder pattern)
    pub fn with_config(mut self, config: PlanConfig) -> Self {
        self.config = config;
        self
    }

    pub fn graph(&self) -> &SkillGraph {
        &self.graph
    }

    pub fn roles(&self) -> &RoleMapper {
        &self.roles
    }

    /// Dependency metadata for a single skill, looked up by free-text name
    pub fn skill_dependencies(&self, name: &str) -> Result<SkillDependencyReport> {
        let skill = SkillId::new(name);
        let kind = self
            .graph
            .kind(&skill)
            .ok_or_else(|| SkillPathError::UnknownSkill(skill.clone()))?;

        Ok(SkillDependencyReport {
            prerequisites: self.graph.ancestors(&skill)?,
            dependents: self.graph.descendants(&skill)?,
            in_degree: self.graph.in_degree(&skill)?,
            out_degree: self.graph.out_degree(&skill)?,
            skill,
            kind,
        })
    }

    /// Synthesize a learning plan from current skills to target skills
    pub fn recommend(
        &self,
        current_skills: &[SkillId],
        target_skills: &[SkillId],
    ) -> Result<LearningPlan> {
        let gap = GapAnalyzer::new(&self.graph).analyze(current_skills, target_skills)?;
        Ok(self.assemble_plan(current_skills, target_skills, gap, None))
    }

    /// Synthesize a plan, preferring an externally proposed skill ordering
    ///
    /// The external text is validated against the engine's own required
    /// skill set; an ordering that mentions fewer than half of the required
    /// skills is discarded and the engine's deterministic path is used.
    pub fn recommend_with_external(
        &self,
        current_skills: &[SkillId],
        target_skills: &[SkillId],
        external_plan_text: &str,
    ) -> Result<LearningPlan> {
        let gap = GapAnalyzer::new(&self.graph).analyze(current_skills, target_skills)?;
        let external = validate_external_ordering(external_plan_text, &gap.flattened_path);
        Ok(self.assemble_plan(current_skills, target_skills, gap, external))
    }

    /// Learning plan for a career transition between two roles
    ///
    /// Both roles are resolved through the role table; a role with no known
    /// skill requirements is an input error.
    pub fn career_transition(&self, from_role: &str, to_role: &str) -> Result<LearningPlan> {
        let current = self.roles.skills_for_role(from_role);
        if current.is_empty() {
            return Err(SkillPathError::InvalidInput(format!(
                "no skill data for role '{}'",
                from_role
            )));
        }
        let target = self.roles.skills_for_role(to_role);
        if target.is_empty() {
            return Err(SkillPathError::InvalidInput(format!(
                "no skill data for role '{}'",
                to_role
            )));
        }

        tracing::debug!(from_role, to_role, "resolving career transition");
        self.recommend(&current, &target)
    }

    fn assemble_plan(
        &self,
        current_skills: &[SkillId],
        target_skills: &[SkillId],
        gap: GapReport,
        external_ordering: Option<Vec<SkillId>>,
    ) -> LearningPlan {
        let (learning_path, source) = match external_ordering {
            Some(ordering) => (ordering, PlanSource::External),
            None => (gap.flattened_path.clone(), PlanSource::Engine),
        };

        LearningPlan {
            plan_id: PlanId::new(),
            generated_at: Utc::now(),
            current_skills: current_skills.to_vec(),
            target_skills: target_skills.to_vec(),
            stages: build_stages(&learning_path, &self.config),
            estimate: estimate_total_time(&learning_path, &self.config),
            learning_path,
            gap,
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(names: &[&str]) -> Vec<SkillId> {
        names.iter().map(|s| SkillId::new(s)).collect()
    }

    #[test]
    fn test_skill_dependencies_report() {
        let service = SkillPathService::with_seed_data();
        let report = service.skill_dependencies("Kubernetes").unwrap();

        assert_eq!(report.skill, "kubernetes".into());
        assert_eq!(report.kind, SkillKind::Technical);
        assert!(report.prerequisites.contains(&SkillId::new("docker")));
        assert!(report.prerequisites.contains(&SkillId::new("linux")));
        assert_eq!(report.in_degree, 2); // docker, networking
    }

    #[test]
    fn test_skill_dependencies_unknown_skill() {
        let service = SkillPathService::with_seed_data();
        let result = service.skill_dependencies("underwater basket weaving");
        assert!(matches!(result, Err(SkillPathError::UnknownSkill(_))));
    }

    #[test]
    fn test_recommend_builds_stages_and_estimate() {
        let service = SkillPathService::with_seed_data();
        let plan = service
            .recommend(
                &skills(&["python", "sql"]),
                &skills(&["django", "postgresql"]),
            )
            .unwrap();

        assert_eq!(plan.source, PlanSource::Engine);
        assert_eq!(plan.learning_path, skills(&["django", "postgresql"]));
        assert_eq!(plan.gap.estimated_duration, "4 weeks");
        assert_eq!(plan.stages.len(), 2);
        assert_eq!(plan.estimate.total_weeks, 4);
        assert_eq!(plan.estimate.total_study_hours, 40);
    }

    #[test]
    fn test_recommend_with_accepted_external_ordering() {
        let service = SkillPathService::with_seed_data();
        let plan = service
            .recommend_with_external(
                &skills(&["python", "sql"]),
                &skills(&["django", "postgresql"]),
                "Start with postgresql, then django.",
            )
            .unwrap();

        assert_eq!(plan.source, PlanSource::External);
        assert_eq!(plan.learning_path, skills(&["postgresql", "django"]));
        // The gap report itself keeps the engine's ordering
        assert_eq!(plan.gap.flattened_path, skills(&["django", "postgresql"]));
    }

    #[test]
    fn test_recommend_with_rejected_external_ordering_falls_back() {
        let service = SkillPathService::with_seed_data();
        let plan = service
            .recommend_with_external(
                &skills(&["python", "sql"]),
                &skills(&["django", "postgresql"]),
                "Learn to juggle first.",
            )
            .unwrap();

        assert_eq!(plan.source, PlanSource::Engine);
        assert_eq!(plan.learning_path, skills(&["django", "postgresql"]));
    }

    #[test]
    fn test_career_transition_resolves_roles() {
        let service = SkillPathService::with_seed_data();
        let plan = service
            .career_transition("data_analyst", "data_engineer")
            .unwrap();

        assert!(!plan.learning_path.is_empty());
        assert!(plan
            .gap
            .missing_skills
            .contains(&SkillId::new("apache spark")));
    }

    #[test]
    fn test_career_transition_unknown_role_is_invalid_input() {
        let service = SkillPathService::with_seed_data();
        let result = service.career_transition("data_analyst", "quantum_wizard");
        assert!(matches!(result, Err(SkillPathError::InvalidInput(_))));
    }

    #[test]
    fn test_plan_ids_are_unique() {
        assert_ne!(PlanId::new(), PlanId::new());
    }
}
