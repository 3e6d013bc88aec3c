//! Core data model and static catalogs for the ridgeline roadmap engine.
//!
//! This crate owns:
//! - the shared types (`Skill`, `SkillCategory`, `CandidateProfile`, ...);
//! - the three read-only lookup tables (role requirements, learning
//!   resources, certifications), externalized as embedded TOML data files and
//!   parsed once at first access;
//! - the ordered substring lookups over those tables.
//!
//! Everything here is immutable after load; the analysis crates are pure
//! functions over these records.

mod catalog;
mod resources;
mod roles;
mod types;

pub use catalog::{catalog, certification_catalog, Catalog, CatalogError, ResourceSet};
pub use resources::resources_for;
pub use roles::{lookup_role, role_catalog};
pub use types::{
    CandidateProfile, CertCategory, Certification, CostType, Difficulty, ExperienceRange,
    LearningResource, Relevance, ResourceKind, RoleRequirements, SalaryBand, Skill, SkillCategory,
    SkillTarget, MAX_PROFICIENCY,
};
