//! Validation of externally generated plan orderings
//!
//! An external text-generation collaborator may propose an alternative skill
//! ordering as free text. Its output is never trusted directly: it is
//! validated against the engine's own required-skill set, as a pure
//! post-processing filter. An ordering that mentions fewer than half of the
//! required skills is rejected and the caller falls back to the engine's
//! deterministic path.

use crate::graph::SkillId;

/// Minimum share of required skills an external ordering must mention
const MIN_COVERAGE: f64 = 0.5;

/// Extract and validate a skill ordering from external plan text
///
/// Scans `plan_text` case-insensitively for each required skill id and
/// returns the mentioned skills ordered by first mention position, or
/// `None` when coverage falls below the acceptance threshold.
pub fn validate_external_ordering(plan_text: &str, required: &[SkillId]) -> Option<Vec<SkillId>> {
    let haystack = plan_text.to_lowercase();

    let mut mentioned: Vec<(usize, SkillId)> = required
        .iter()
        .filter_map(|skill| haystack.find(skill.as_str()).map(|pos| (pos, skill.clone())))
        .collect();

    if (mentioned.len() as f64) < (required.len() as f64) * MIN_COVERAGE {
        tracing::warn!(
            mentioned = mentioned.len(),
            required = required.len(),
            "external plan ordering rejected: insufficient skill coverage"
        );
        return None;
    }

    mentioned.sort_by_key(|(pos, _)| *pos);
    Some(mentioned.into_iter().map(|(_, skill)| skill).collect())
}
