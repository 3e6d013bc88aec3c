//! Skills-gap analysis for the ridgeline roadmap engine.
//!
//! Diffs a candidate's self-reported skills against a role's required and
//! preferred targets, producing prioritized gaps, a 0-100 gap score, a
//! readiness bucket, and templated guidance. Every function is pure and
//! total; unknown roles degrade to empty results rather than failing.

mod analyzer;
mod recommendations;
mod types;

pub use analyzer::{analyze_skills_gap, format_months};
pub use recommendations::skill_development_recommendations;
pub use types::{GapAnalysis, GapPriority, ReadinessLevel, SkillGap};
