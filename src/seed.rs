//! Curated seed data: the hand-maintained skill dependency tables and the
//! default role-to-skill mapping
//!
//! The seed graph must be a DAG. Cycles are not detected at runtime; acyclic
//! data is a structural invariant maintained by whoever edits these tables.

use indexmap::IndexMap;

use crate::graph::{SkillGraph, SkillKind};
use crate::roles::RoleMapper;

/// Programming language and framework prerequisites
const LANGUAGE_DEPS: &[(&str, &[&str])] = &[
    ("python", &["programming fundamentals"]),
    ("java", &["programming fundamentals"]),
    ("javascript", &["html", "css"]),
    ("typescript", &["javascript"]),
    ("react", &["javascript", "html", "css"]),
    ("angular", &["typescript", "javascript"]),
    ("vue", &["javascript", "html", "css"]),
    ("node.js", &["javascript"]),
    ("django", &["python"]),
    ("flask", &["python"]),
    ("spring", &["java"]),
    ("express", &["javascript", "node.js"]),
    ("laravel", &["php"]),
    ("rails", &["ruby"]),
];

/// Database prerequisites
const DB_DEPS: &[(&str, &[&str])] = &[
    ("postgresql", &["sql"]),
    ("mysql", &["sql"]),
    ("mongodb", &["json", "javascript"]),
    ("redis", &["data structures"]),
    ("elasticsearch", &["json", "search algorithms"]),
    ("snowflake", &["sql", "data warehousing"]),
    ("bigquery", &["sql", "data warehousing"]),
];

/// Cloud and devops prerequisites
const CLOUD_DEPS: &[(&str, &[&str])] = &[
    ("docker", &["linux", "networking"]),
    ("kubernetes", &["docker", "networking"]),
    ("aws", &["networking", "linux"]),
    ("azure", &["networking", "linux"]),
    ("gcp", &["networking", "linux"]),
    ("terraform", &["yaml", "networking"]),
    ("jenkins", &["java", "scripting"]),
    ("gitlab", &["git"]),
    ("github actions", &["git", "yaml"]),
];

/// Data engineering prerequisites
const DATA_ENG_DEPS: &[(&str, &[&str])] = &[
    ("apache spark", &["python", "java", "distributed systems"]),
    ("hadoop", &["java", "distributed systems"]),
    ("kafka", &["java", "distributed systems"]),
    ("airflow", &["python", "workflow management"]),
    ("dbt", &["sql", "data modeling"]),
    ("pandas", &["python"]),
    ("numpy", &["python"]),
    ("scikit-learn", &["python", "pandas", "numpy", "mathematics"]),
];

/// Machine learning prerequisites
const ML_DEPS: &[(&str, &[&str])] = &[
    ("tensorflow", &["python", "mathematics", "linear algebra"]),
    ("pytorch", &["python", "mathematics", "linear algebra"]),
    ("hugging face", &["python", "transformers", "nlp"]),
    ("mlflow", &["python", "mlops"]),
];

/// Foundational skills that may not appear as anyone's prerequisite
const FOUNDATIONAL_SKILLS: &[&str] = &[
    "programming fundamentals",
    "data structures",
    "algorithms",
    "networking",
    "linux",
    "git",
    "sql",
    "html",
    "css",
    "mathematics",
    "linear algebra",
    "workflow management",
    "data modeling",
    "data warehousing",
    "distributed systems",
    "scripting",
    "yaml",
    "json",
    "search algorithms",
    "mlops",
];

/// Build the curated seed graph
pub fn seed_graph() -> SkillGraph {
    let mut graph = SkillGraph::new();

    let tables = [LANGUAGE_DEPS, DB_DEPS, CLOUD_DEPS, DATA_ENG_DEPS, ML_DEPS];
    for table in tables {
        for (skill, prerequisites) in table {
            graph.add_skill(*skill, SkillKind::Technical);
            for prereq in *prerequisites {
                graph.add_prerequisite(*prereq, *skill);
            }
        }
    }

    for skill in FOUNDATIONAL_SKILLS {
        graph.add_skill(*skill, SkillKind::Foundational);
    }

    tracing::info!(
        nodes = graph.len(),
        edges = graph.edges().len(),
        "seeded skill dependency graph"
    );
    graph
}

/// Build the default role-to-skill mapping
pub fn default_roles() -> RoleMapper {
    let roles: &[(&str, &[&str])] = &[
        ("data_analyst", &["python", "sql", "pandas", "numpy", "excel"]),
        (
            "data_engineer",
            &["python", "sql", "apache spark", "airflow", "kafka", "hadoop"],
        ),
        (
            "software_engineer",
            &[
                "python",
                "java",
                "javascript",
                "data structures",
                "algorithms",
                "system design",
            ],
        ),
        (
            "frontend_developer",
            &["html", "css", "javascript", "react", "angular", "vue"],
        ),
        (
            "backend_developer",
            &["python", "java", "node.js", "databases", "apis"],
        ),
        (
            "fullstack_developer",
            &["html", "css", "javascript", "python", "java", "databases", "apis"],
        ),
        (
            "devops_engineer",
            &["linux", "docker", "kubernetes", "aws", "jenkins", "terraform"],
        ),
        (
            "machine_learning_engineer",
            &["python", "mathematics", "scikit-learn", "tensorflow", "pytorch"],
        ),
    ];

    let table: IndexMap<String, Vec<_>> = roles
        .iter()
        .map(|(role, skills)| {
            (
                role.to_string(),
                skills.iter().map(|s| (*s).into()).collect(),
            )
        })
        .collect();
    RoleMapper::new(table)
}
