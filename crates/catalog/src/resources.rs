//! Resource lookup over the embedded learning-resource table.

use crate::catalog::catalog;
use crate::types::LearningResource;
use tracing::debug;

/// Find catalog resources for a skill name.
///
/// Scans resource sets in declaration order and returns the first set whose
/// keyword is a substring of the skill name or vice versa. Returns `None` on
/// a miss; callers synthesize placeholders.
pub fn resources_for(skill: &str) -> Option<&'static [LearningResource]> {
    let needle = skill.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }
    for set in &catalog().resources {
        if needle.contains(&set.pattern) || set.pattern.contains(&needle) {
            return Some(&set.resources);
        }
    }
    debug!(skill, "no resource set matched");
    None
}
