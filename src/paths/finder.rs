//! Shortest learning path search
//!
//! Finds the shortest prerequisite-respecting route from any of a set of
//! known skills to a target skill. The search is restricted to a transient
//! relevance subgraph: the union of the known skills, the target, and the
//! target's prerequisite closure. All edges have uniform cost (1 hop = 1
//! unit), so unweighted BFS is shortest-path exact.

use std::collections::{HashMap, VecDeque};

use indexmap::IndexSet;
use petgraph::graph::NodeIndex;
use petgraph::Direction;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, SkillPathError};
use crate::graph::{SkillGraph, SkillId};

/// Learning path to a single target skill
///
/// Immutable once returned; its lifetime is the single query response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LearningPath {
    /// Skills to learn, in traversal order, excluding the starting skill.
    /// The target skill is the final element. Empty when the target is
    /// already known.
    pub steps: Vec<SkillId>,
    /// Hop count of the route
    pub length: usize,
    /// Full prerequisite closure of the target (unordered)
    pub prerequisites: IndexSet<SkillId>,
}

impl LearningPath {
    /// Zero-length path for an already-known target
    fn already_known() -> Self {
        Self {
            steps: Vec::new(),
            length: 0,
            prerequisites: IndexSet::new(),
        }
    }
}

/// Shortest-path search over a skill graph
pub struct PathFinder<'g> {
    graph: &'g SkillGraph,
}

impl<'g> PathFinder<'g> {
    pub fn new(graph: &'g SkillGraph) -> Self {
        Self { graph }
    }

    /// Find the shortest route from any known skill to `target`
    ///
    /// A target already in `known_skills` yields a zero-length path, not an
    /// error. Ties on hop count are broken by the order the known skills
    /// were supplied: the first listed known skill wins. When no known
    /// skill connects to the target the result is `NotFound`, signalling
    /// that the full prerequisite chain must be learned from scratch.
    pub fn find_path(&self, known_skills: &[SkillId], target: &SkillId) -> Result<LearningPath> {
        if known_skills.contains(target) {
            return Ok(LearningPath::already_known());
        }

        // Relevance subgraph: known skills, the target, and the target's
        // prerequisite closure. An unseeded target simply contributes an
        // empty ancestor set.
        let prerequisites = self.graph.ancestors(target).unwrap_or_default();
        let mut relevant: IndexSet<SkillId> = known_skills.iter().cloned().collect();
        relevant.insert(target.clone());
        relevant.extend(prerequisites.iter().cloned());

        let mut best: Option<Vec<SkillId>> = None;
        for start in known_skills {
            if !self.graph.has_skill(start) {
                continue;
            }
            if let Some(path) = self.bfs_shortest(start, target, &relevant) {
                // Strictly-less keeps the first supplied known skill on ties
                let better = match &best {
                    Some(current) => path.len() < current.len(),
                    None => true,
                };
                if better {
                    best = Some(path);
                }
            }
        }

        match best {
            Some(path) => {
                let steps: Vec<SkillId> = path.into_iter().skip(1).collect();
                tracing::debug!(target_skill = %target, hops = steps.len(), "found learning path");
                Ok(LearningPath {
                    length: steps.len(),
                    steps,
                    prerequisites,
                })
            }
            None => Err(SkillPathError::NotFound(format!(
                "no learning route from known skills to '{}'",
                target
            ))),
        }
    }

    /// Unweighted BFS from `start` to `target`, restricted to `allowed`
    ///
    /// Returns the full node sequence including the start, or `None` when
    /// the target is unreachable inside the restriction.
    fn bfs_shortest(
        &self,
        start: &SkillId,
        target: &SkillId,
        allowed: &IndexSet<SkillId>,
    ) -> Option<Vec<SkillId>> {
        let graph = self.graph.petgraph();
        let start_idx = self.graph.node_index(start).ok()?;
        let target_idx = self.graph.node_index(target).ok()?;

        let mut predecessor: HashMap<NodeIndex, NodeIndex> = HashMap::new();
        let mut queue = VecDeque::new();
        queue.push_back(start_idx);
        predecessor.insert(start_idx, start_idx);

        while let Some(node) = queue.pop_front() {
            if node == target_idx {
                return Some(Self::reconstruct(graph, &predecessor, start_idx, target_idx));
            }
            for neighbor in graph.neighbors_directed(node, Direction::Outgoing) {
                if predecessor.contains_key(&neighbor) {
                    continue;
                }
                if !allowed.contains(&graph[neighbor]) {
                    continue;
                }
                predecessor.insert(neighbor, node);
                queue.push_back(neighbor);
            }
        }
        None
    }

    fn reconstruct(
        graph: &petgraph::graph::DiGraph<SkillId, ()>,
        predecessor: &HashMap<NodeIndex, NodeIndex>,
        start: NodeIndex,
        target: NodeIndex,
    ) -> Vec<SkillId> {
        let mut path = vec![graph[target].clone()];
        let mut node = target;
        while node != start {
            node = predecessor[&node];
            path.push(graph[node].clone());
        }
        path.reverse();
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn known(skills: &[&str]) -> Vec<SkillId> {
        skills.iter().map(|s| SkillId::new(s)).collect()
    }

    fn sample_graph() -> SkillGraph {
        let mut graph = SkillGraph::new();
        graph.add_prerequisite("sql", "postgresql");
        graph.add_prerequisite("python", "django");
        graph.add_prerequisite("python", "pandas");
        graph.add_prerequisite("pandas", "scikit-learn");
        graph.add_prerequisite("numpy", "scikit-learn");
        graph.add_prerequisite("python", "numpy");
        graph
    }

    #[test]
    fn test_single_hop_path() {
        let graph = sample_graph();
        let finder = PathFinder::new(&graph);

        let path = finder
            .find_path(&known(&["python", "sql"]), &"django".into())
            .unwrap();
        assert_eq!(path.steps, known(&["django"]));
        assert_eq!(path.length, 1);
        assert!(path.prerequisites.contains(&SkillId::new("python")));
    }

    #[test]
    fn test_multi_hop_path_ends_with_target() {
        let graph = sample_graph();
        let finder = PathFinder::new(&graph);

        let path = finder
            .find_path(&known(&["python"]), &"scikit-learn".into())
            .unwrap();
        assert_eq!(path.steps.last(), Some(&"scikit-learn".into()));
        assert_eq!(path.length, 2);
        assert_eq!(path.steps.len(), path.length);
    }

    #[test]
    fn test_known_target_returns_zero_length_path() {
        let graph = sample_graph();
        let finder = PathFinder::new(&graph);

        let path = finder
            .find_path(&known(&["python", "django"]), &"django".into())
            .unwrap();
        assert!(path.steps.is_empty());
        assert_eq!(path.length, 0);
    }

    #[test]
    fn test_no_route_is_not_found() {
        let graph = sample_graph();
        let finder = PathFinder::new(&graph);

        // sql does not connect to django
        let result = finder.find_path(&known(&["sql"]), &"django".into());
        assert!(matches!(result, Err(SkillPathError::NotFound(_))));
    }

    #[test]
    fn test_empty_known_set_is_not_found() {
        let graph = sample_graph();
        let finder = PathFinder::new(&graph);

        let result = finder.find_path(&[], &"django".into());
        assert!(matches!(result, Err(SkillPathError::NotFound(_))));
    }

    #[test]
    fn test_unseeded_target_is_not_found() {
        let graph = sample_graph();
        let finder = PathFinder::new(&graph);

        let result = finder.find_path(&known(&["python"]), &"quantum computing".into());
        assert!(matches!(result, Err(SkillPathError::NotFound(_))));
    }

    #[test]
    fn test_tie_break_prefers_first_known_skill() {
        // Two equal-length routes into "scikit-learn": via pandas and via
        // numpy. The starting skill listed first must win.
        let mut graph = SkillGraph::new();
        graph.add_prerequisite("pandas", "scikit-learn");
        graph.add_prerequisite("numpy", "scikit-learn");

        let finder = PathFinder::new(&graph);
        let path = finder
            .find_path(&known(&["numpy", "pandas"]), &"scikit-learn".into())
            .unwrap();
        assert_eq!(path.length, 1);

        // Both routes produce the same single step here; assert the search
        // settled on the first candidate by checking determinism across runs.
        let again = finder
            .find_path(&known(&["numpy", "pandas"]), &"scikit-learn".into())
            .unwrap();
        assert_eq!(path, again);
    }

    #[test]
    fn test_path_never_contains_duplicates() {
        let graph = sample_graph();
        let finder = PathFinder::new(&graph);

        let path = finder
            .find_path(&known(&["python"]), &"scikit-learn".into())
            .unwrap();
        let unique: IndexSet<&SkillId> = path.steps.iter().collect();
        assert_eq!(unique.len(), path.steps.len());
    }

    #[test]
    fn test_unseeded_known_skills_are_skipped() {
        let graph = sample_graph();
        let finder = PathFinder::new(&graph);

        let path = finder
            .find_path(&known(&["excel", "python"]), &"django".into())
            .unwrap();
        assert_eq!(path.steps, known(&["django"]));
    }

    #[test]
    fn test_shortest_route_wins_over_longer_one() {
        let mut graph = SkillGraph::new();
        graph.add_prerequisite("a", "detour");
        graph.add_prerequisite("detour", "b");
        graph.add_prerequisite("a", "b");

        let finder = PathFinder::new(&graph);
        let path = finder.find_path(&known(&["a"]), &"b".into()).unwrap();
        assert_eq!(path.length, 1);
        assert_eq!(path.steps, known(&["b"]));
    }
}
