//! Transitive closure queries over the skill graph
//!
//! Standard reverse/forward reachability. Graphs are small (tens to low
//! hundreds of nodes) so no early termination is needed.

use indexmap::IndexSet;
use petgraph::graph::NodeIndex;
use petgraph::Direction;

use super::store::{SkillGraph, SkillId};
use crate::errors::Result;

impl SkillGraph {
    /// Transitive prerequisite closure: every skill reachable by following
    /// prerequisite edges backward
    ///
    /// Returns an empty set (not an error) for a skill with no incoming
    /// edges. Fails with `UnknownSkill` when the skill is absent.
    pub fn ancestors(&self, id: &SkillId) -> Result<IndexSet<SkillId>> {
        let start = self.node_index(id)?;
        Ok(self.reachable(start, Direction::Incoming))
    }

    /// Transitive dependents: every skill reachable forward
    pub fn descendants(&self, id: &SkillId) -> Result<IndexSet<SkillId>> {
        let start = self.node_index(id)?;
        Ok(self.reachable(start, Direction::Outgoing))
    }

    fn reachable(&self, start: NodeIndex, direction: Direction) -> IndexSet<SkillId> {
        let graph = self.petgraph();
        let mut result = IndexSet::new();
        let mut visited = vec![false; graph.node_count()];
        let mut stack = vec![start];
        visited[start.index()] = true;

        while let Some(node) = stack.pop() {
            for neighbor in graph.neighbors_directed(node, direction) {
                if !visited[neighbor.index()] {
                    visited[neighbor.index()] = true;
                    result.insert(graph[neighbor].clone());
                    stack.push(neighbor);
                }
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::SkillPathError;
    use crate::graph::SkillKind;

    fn chain_graph() -> SkillGraph {
        // sql -> postgresql -> snowflake, python -> django
        let mut graph = SkillGraph::new();
        graph.add_prerequisite("sql", "postgresql");
        graph.add_prerequisite("postgresql", "snowflake");
        graph.add_prerequisite("python", "django");
        graph
    }

    #[test]
    fn test_ancestors_are_transitive() {
        let graph = chain_graph();
        let ancestors = graph.ancestors(&"snowflake".into()).unwrap();
        assert_eq!(ancestors.len(), 2);
        assert!(ancestors.contains(&SkillId::new("postgresql")));
        assert!(ancestors.contains(&SkillId::new("sql")));
    }

    #[test]
    fn test_descendants_are_transitive() {
        let graph = chain_graph();
        let descendants = graph.descendants(&"sql".into()).unwrap();
        assert_eq!(descendants.len(), 2);
        assert!(descendants.contains(&SkillId::new("postgresql")));
        assert!(descendants.contains(&SkillId::new("snowflake")));
    }

    #[test]
    fn test_root_skill_has_no_ancestors() {
        let graph = chain_graph();
        assert!(graph.ancestors(&"sql".into()).unwrap().is_empty());
        assert!(graph.ancestors(&"python".into()).unwrap().is_empty());
    }

    #[test]
    fn test_closure_excludes_self() {
        let graph = chain_graph();
        let ancestors = graph.ancestors(&"postgresql".into()).unwrap();
        assert!(!ancestors.contains(&SkillId::new("postgresql")));
    }

    #[test]
    fn test_unknown_skill_fails() {
        let graph = chain_graph();
        let result = graph.ancestors(&"rust".into());
        assert!(matches!(result, Err(SkillPathError::UnknownSkill(_))));
    }

    #[test]
    fn test_every_edge_is_in_both_closures() {
        let mut graph = SkillGraph::new();
        graph.add_skill("git", SkillKind::Foundational);
        graph.add_prerequisite("git", "gitlab");
        graph.add_prerequisite("git", "github actions");
        graph.add_prerequisite("yaml", "github actions");

        for (prereq, skill) in graph.edges() {
            assert!(graph.ancestors(&skill).unwrap().contains(&prereq));
            assert!(graph.descendants(&prereq).unwrap().contains(&skill));
        }
    }
}
