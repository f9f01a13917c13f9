//! In-memory directed graph of skills and prerequisite edges
//!
//! Edge direction: `prereq -> skill` means the prerequisite must be learned
//! before the skill. The graph is append-only: seeding happens once,
//! single-threaded, before any query traffic, and every query method takes
//! `&self`.

use std::collections::HashMap;
use std::fmt;

use indexmap::IndexSet;
use petgraph::graph::{DiGraph, NodeIndex};
use serde::{Deserialize, Serialize};

use crate::errors::{Result, SkillPathError};

/// Case-normalized skill identifier
///
/// Skill names are free-text strings (`"python"`, `"apache spark"`). All
/// lookups are case-insensitive, so the raw text is trimmed and lowercased
/// once at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillId(String);

impl SkillId {
    /// Normalize a raw skill name into an identifier
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SkillId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SkillId {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for SkillId {
    fn from(raw: String) -> Self {
        Self::new(&raw)
    }
}

/// Classification tag for a skill node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillKind {
    /// Base knowledge declared in the curated seed (sql, networking, ...)
    Foundational,
    /// Skill that carries prerequisites of its own (django, kubernetes, ...)
    Technical,
}

/// Directed skill dependency graph
///
/// Nodes are created implicitly the first time they appear as either a skill
/// or a prerequisite; no node is ever deleted at runtime.
pub struct SkillGraph {
    graph: DiGraph<SkillId, ()>,
    node_indices: HashMap<SkillId, NodeIndex>,
    kinds: HashMap<SkillId, SkillKind>,
}

impl SkillGraph {
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            node_indices: HashMap::new(),
            kinds: HashMap::new(),
        }
    }

    /// Add a skill node with an explicit classification
    ///
    /// Idempotent: if the node exists the call is a no-op. First
    /// classification wins, matching curated-seed semantics where
    /// foundational skills are declared once.
    pub fn add_skill(&mut self, id: impl Into<SkillId>, kind: SkillKind) {
        let id = id.into();
        if self.node_indices.contains_key(&id) {
            return;
        }
        let idx = self.graph.add_node(id.clone());
        self.node_indices.insert(id.clone(), idx);
        self.kinds.insert(id, kind);
    }

    /// Insert a prerequisite edge: `prereq` must be learned before `skill`
    ///
    /// Both nodes are created if absent; a brand-new target skill is
    /// classified `Technical` and a brand-new prerequisite `Foundational`,
    /// the defaults used by the seed builder. Adding the same edge twice is
    /// idempotent.
    pub fn add_prerequisite(&mut self, prereq: impl Into<SkillId>, skill: impl Into<SkillId>) {
        let prereq = prereq.into();
        let skill = skill.into();

        let from_idx = self.get_or_create_node(prereq, SkillKind::Foundational);
        let to_idx = self.get_or_create_node(skill, SkillKind::Technical);

        if self.graph.find_edge(from_idx, to_idx).is_some() {
            return; // Already exists, no-op
        }
        self.graph.add_edge(from_idx, to_idx, ());
    }

    pub fn has_skill(&self, id: &SkillId) -> bool {
        self.node_indices.contains_key(id)
    }

    /// Classification of a skill, `None` if the node is absent
    pub fn kind(&self, id: &SkillId) -> Option<SkillKind> {
        self.kinds.get(id).copied()
    }

    /// All skill ids currently in the graph, in insertion order
    pub fn nodes(&self) -> IndexSet<SkillId> {
        self.graph.node_weights().cloned().collect()
    }

    /// All `(prereq, skill)` pairs currently in the graph
    pub fn edges(&self) -> Vec<(SkillId, SkillId)> {
        self.graph
            .edge_indices()
            .filter_map(|e| self.graph.edge_endpoints(e))
            .map(|(from, to)| (self.graph[from].clone(), self.graph[to].clone()))
            .collect()
    }

    /// Number of direct prerequisites of a skill
    pub fn in_degree(&self, id: &SkillId) -> Result<usize> {
        let idx = self.node_index(id)?;
        Ok(self
            .graph
            .neighbors_directed(idx, petgraph::Direction::Incoming)
            .count())
    }

    /// Number of skills directly depending on a skill
    pub fn out_degree(&self, id: &SkillId) -> Result<usize> {
        let idx = self.node_index(id)?;
        Ok(self
            .graph
            .neighbors_directed(idx, petgraph::Direction::Outgoing)
            .count())
    }

    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    pub(crate) fn node_index(&self, id: &SkillId) -> Result<NodeIndex> {
        self.node_indices
            .get(id)
            .copied()
            .ok_or_else(|| SkillPathError::UnknownSkill(id.clone()))
    }

    pub(crate) fn petgraph(&self) -> &DiGraph<SkillId, ()> {
        &self.graph
    }

    fn get_or_create_node(&mut self, id: SkillId, default_kind: SkillKind) -> NodeIndex {
        if let Some(&idx) = self.node_indices.get(&id) {
            return idx;
        }
        let idx = self.graph.add_node(id.clone());
        self.node_indices.insert(id.clone(), idx);
        self.kinds.insert(id, default_kind);
        idx
    }
}

impl Default for SkillGraph {
    fn default() -> Self {
        Self::new()
    }
}
