//! Export and import functionality for the skill graph
//!
//! Provides serialization to/from JSON for backup and migration of the
//! curated seed data.

use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::graph::{SkillGraph, SkillId, SkillKind};

/// Export format for a skill graph
#[derive(Serialize, Deserialize)]
pub struct GraphExport {
    pub version: String,
    pub exported_at: chrono::DateTime<chrono::Utc>,
    pub nodes: Vec<NodeExport>,
    pub edges: Vec<(SkillId, SkillId)>,
}

/// A single node in the export document
#[derive(Serialize, Deserialize)]
pub struct NodeExport {
    pub id: SkillId,
    pub kind: SkillKind,
}

/// Export a skill graph as pretty-printed JSON
pub fn export_graph(graph: &SkillGraph) -> Result<String> {
    let nodes = graph
        .nodes()
        .into_iter()
        .map(|id| {
            let kind = graph.kind(&id).unwrap_or(SkillKind::Foundational);
            NodeExport { id, kind }
        })
        .collect();

    let export = GraphExport {
        version: "1.0".to_string(),
        exported_at: chrono::Utc::now(),
        nodes,
        edges: graph.edges(),
    };
    Ok(serde_json::to_string_pretty(&export)?)
}

/// Export a skill graph to a file
pub fn export_graph_to_file(graph: &SkillGraph, path: &std::path::Path) -> Result<()> {
    let json = export_graph(graph)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Rebuild a skill graph from an export document
///
/// Nodes are inserted before edges so that exported classifications win over
/// the defaults `add_prerequisite` would otherwise apply.
pub fn import_graph(json: &str) -> Result<SkillGraph> {
    let export: GraphExport = serde_json::from_str(json)?;

    let mut graph = SkillGraph::new();
    for node in export.nodes {
        graph.add_skill(node.id, node.kind);
    }
    for (prereq, skill) in export.edges {
        graph.add_prerequisite(prereq, skill);
    }
    Ok(graph)
}

/// Import a skill graph from a file
pub fn import_graph_from_file(path: &std::path::Path) -> Result<SkillGraph> {
    let json = std::fs::read_to_string(path)?;
    import_graph(&json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_import_roundtrip() {
        let mut graph = SkillGraph::new();
        graph.add_skill("sql", SkillKind::Foundational);
        graph.add_prerequisite("sql", "postgresql");
        graph.add_prerequisite("python", "django");

        let json = export_graph(&graph).unwrap();
        assert!(json.contains("version"));
        assert!(json.contains("postgresql"));

        let imported = import_graph(&json).unwrap();
        assert_eq!(imported.nodes(), graph.nodes());
        assert_eq!(imported.edges().len(), graph.edges().len());
        assert_eq!(imported.kind(&"sql".into()), Some(SkillKind::Foundational));
        assert_eq!(
            imported.kind(&"postgresql".into()),
            Some(SkillKind::Technical)
        );
    }

    #[test]
    fn test_file_roundtrip() {
        let graph = crate::seed::seed_graph();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("skill_graph.json");
        export_graph_to_file(&graph, &path).unwrap();

        let imported = import_graph_from_file(&path).unwrap();
        assert_eq!(imported.len(), graph.len());
        assert_eq!(imported.edges().len(), graph.edges().len());
    }

    #[test]
    fn test_import_rejects_malformed_json() {
        let result = import_graph("not json");
        assert!(matches!(
            result,
            Err(crate::errors::SkillPathError::Serialization(_))
        ));
    }
}
