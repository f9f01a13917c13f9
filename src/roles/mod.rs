//! Static role-to-skill lookup table
//!
//! Maps a role name to the canonical skill set expected of that role. The
//! table is loaded once at engine construction and read-only afterwards.

use indexmap::IndexMap;

use crate::graph::SkillId;

/// Case-insensitive role-to-skill lookup
pub struct RoleMapper {
    table: IndexMap<String, Vec<SkillId>>,
}

impl RoleMapper {
    /// Build a mapper from a role table; keys are normalized to lowercase
    pub fn new(table: IndexMap<String, Vec<SkillId>>) -> Self {
        let table = table
            .into_iter()
            .map(|(role, skills)| (role.trim().to_lowercase(), skills))
            .collect();
        Self { table }
    }

    /// Skills expected for a role
    ///
    /// Returns an empty list for unknown roles, not an error: callers must
    /// treat an empty set as "no known requirement data for this role".
    pub fn skills_for_role(&self, role: &str) -> Vec<SkillId> {
        self.table
            .get(&role.trim().to_lowercase())
            .cloned()
            .unwrap_or_default()
    }

    pub fn contains_role(&self, role: &str) -> bool {
        self.table.contains_key(&role.trim().to_lowercase())
    }

    /// Known role names, in table order
    pub fn roles(&self) -> impl Iterator<Item = &str> {
        self.table.keys().map(|r| r.as_str())
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}
