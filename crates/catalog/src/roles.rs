//! Role lookup over the embedded requirements table.

use crate::catalog::catalog;
use crate::types::{ExperienceRange, RoleRequirements, SalaryBand};
use std::sync::LazyLock;
use tracing::debug;

/// Generic record returned when no catalog role matches.
static FALLBACK: LazyLock<RoleRequirements> = LazyLock::new(|| RoleRequirements {
    key: String::new(),
    title: "General Role".to_string(),
    experience: ExperienceRange {
        min_years: 0,
        max_years: 3,
    },
    salary: SalaryBand {
        min: 60_000,
        max: 95_000,
    },
    required_skills: Vec::new(),
    preferred_skills: Vec::new(),
});

/// Resolve a free-text role string to a requirements record.
///
/// Matching precedence:
/// 1. exact match on the lowercase key;
/// 2. declaration-order scan where the key is a substring of the input or
///    the input is a substring of the key.
///
/// Unknown roles resolve to a generic fallback with empty skill lists, so the
/// lookup is total.
pub fn lookup_role(role: &str) -> &'static RoleRequirements {
    let needle = role.trim().to_lowercase();
    if needle.is_empty() {
        return &FALLBACK;
    }

    let roles = &catalog().roles;
    if let Some(role) = roles.iter().find(|candidate| candidate.key == needle) {
        return role;
    }
    for candidate in roles {
        if needle.contains(&candidate.key) || candidate.key.contains(&needle) {
            debug!(input = %role, key = %candidate.key, "role matched by substring");
            return candidate;
        }
    }

    debug!(input = %role, "no role match, using generic fallback");
    &FALLBACK
}

/// All known roles in declaration order.
pub fn role_catalog() -> &'static [RoleRequirements] {
    &catalog().roles
}
