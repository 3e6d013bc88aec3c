//! Profile loading and edge validation.
//!
//! The library crates are total over their inputs; the guard rails the UI
//! used to enforce (a current role, a target role, at least one skill) live
//! here at the binary edge instead.

use anyhow::{bail, Context, Result};
use ridgeline_catalog::CandidateProfile;
use std::fs;
use std::path::Path;

/// Load a candidate profile from a JSON file.
pub fn load_profile(path: &Path) -> Result<CandidateProfile> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading profile file {}", path.display()))?;
    let profile: CandidateProfile = serde_json::from_str(&raw)
        .with_context(|| format!("parsing profile file {}", path.display()))?;
    Ok(profile)
}

/// Validate a profile and resolve the effective target role.
pub fn validate_profile(
    profile: &CandidateProfile,
    role_override: Option<&str>,
) -> Result<String> {
    if profile.current_role.trim().is_empty() {
        bail!("profile is missing a current role");
    }
    let target = role_override
        .map(str::to_string)
        .unwrap_or_else(|| profile.target_role.clone());
    if target.trim().is_empty() {
        bail!("no target role: set `target_role` in the profile or pass --role");
    }
    if profile.skills.is_empty() {
        bail!("profile lists no skills; add at least one to analyze");
    }
    Ok(target)
}
