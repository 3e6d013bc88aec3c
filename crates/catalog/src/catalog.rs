//! Embedded catalog loading and validation.
//!
//! The three lookup tables live in `data/*.toml` so they can be maintained
//! without touching code. They are compiled into the binary and parsed once
//! on first access; validation failures are unreachable in a released build
//! because the embedded data is checked by the test suite.

use crate::types::{Certification, LearningResource, RoleRequirements, MAX_PROFICIENCY};
use serde::Deserialize;
use std::collections::HashSet;
use std::sync::LazyLock;
use thiserror::Error;

const ROLES_TOML: &str = include_str!("../data/roles.toml");
const RESOURCES_TOML: &str = include_str!("../data/resources.toml");
const CERTIFICATIONS_TOML: &str = include_str!("../data/certifications.toml");

/// Errors raised when parsing or validating catalog data.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to parse {file}")]
    Parse {
        file: &'static str,
        #[source]
        source: Box<toml::de::Error>,
    },
    #[error("role entry {0} has an empty key")]
    EmptyRoleKey(usize),
    #[error("duplicate role key `{0}`")]
    DuplicateRoleKey(String),
    #[error("role `{role}` target `{skill}` has level {level}, max is {max}", max = MAX_PROFICIENCY)]
    TargetLevelOutOfRange {
        role: String,
        skill: String,
        level: u8,
    },
    #[error("role `{0}` has an inverted salary band")]
    InvertedSalaryBand(String),
    #[error("resource set `{0}` has no resources")]
    EmptyResourceSet(String),
    #[error("resource set entry {0} has an empty match keyword")]
    EmptyResourcePattern(usize),
    #[error("certification `{0}` lists no skills")]
    CertificationWithoutSkills(String),
}

/// A resource list keyed by a substring match keyword.
#[derive(Debug, Clone, Deserialize)]
pub struct ResourceSet {
    /// Lowercase keyword matched by substring against gap skill names.
    #[serde(rename = "match")]
    pub pattern: String,
    /// Resources attached when the keyword matches.
    pub resources: Vec<LearningResource>,
}

#[derive(Debug, Deserialize)]
struct RolesFile {
    roles: Vec<RoleRequirements>,
}

#[derive(Debug, Deserialize)]
struct ResourcesFile {
    skills: Vec<ResourceSet>,
}

#[derive(Debug, Deserialize)]
struct CertificationsFile {
    certifications: Vec<Certification>,
}

/// The three immutable lookup tables, in declaration order.
#[derive(Debug)]
pub struct Catalog {
    pub roles: Vec<RoleRequirements>,
    pub resources: Vec<ResourceSet>,
    pub certifications: Vec<Certification>,
}

impl Catalog {
    /// Parse and validate catalog data from TOML sources.
    pub fn from_toml(
        roles: &str,
        resources: &str,
        certifications: &str,
    ) -> Result<Self, CatalogError> {
        let roles: RolesFile = toml::from_str(roles).map_err(|source| CatalogError::Parse {
            file: "roles.toml",
            source: Box::new(source),
        })?;
        let resources: ResourcesFile =
            toml::from_str(resources).map_err(|source| CatalogError::Parse {
                file: "resources.toml",
                source: Box::new(source),
            })?;
        let certifications: CertificationsFile =
            toml::from_str(certifications).map_err(|source| CatalogError::Parse {
                file: "certifications.toml",
                source: Box::new(source),
            })?;

        let catalog = Self {
            roles: roles.roles,
            resources: resources.skills,
            certifications: certifications.certifications,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        let mut seen_keys = HashSet::new();
        for (index, role) in self.roles.iter().enumerate() {
            if role.key.is_empty() {
                return Err(CatalogError::EmptyRoleKey(index));
            }
            if !seen_keys.insert(role.key.as_str()) {
                return Err(CatalogError::DuplicateRoleKey(role.key.clone()));
            }
            if role.salary.min > role.salary.max {
                return Err(CatalogError::InvertedSalaryBand(role.key.clone()));
            }
            for target in role.required_skills.iter().chain(&role.preferred_skills) {
                if target.level > MAX_PROFICIENCY {
                    return Err(CatalogError::TargetLevelOutOfRange {
                        role: role.key.clone(),
                        skill: target.name.clone(),
                        level: target.level,
                    });
                }
            }
        }
        for (index, set) in self.resources.iter().enumerate() {
            if set.pattern.is_empty() {
                return Err(CatalogError::EmptyResourcePattern(index));
            }
            if set.resources.is_empty() {
                return Err(CatalogError::EmptyResourceSet(set.pattern.clone()));
            }
        }
        for certification in &self.certifications {
            if certification.skills.is_empty() {
                return Err(CatalogError::CertificationWithoutSkills(
                    certification.name.clone(),
                ));
            }
        }
        Ok(())
    }
}

/// Shared immutable catalog, parsed once on first access.
pub fn catalog() -> &'static Catalog {
    static CATALOG: LazyLock<Catalog> = LazyLock::new(|| {
        Catalog::from_toml(ROLES_TOML, RESOURCES_TOML, CERTIFICATIONS_TOML)
            .expect("embedded catalog data is valid")
    });
    &CATALOG
}

/// Full certification catalog in declaration order.
pub fn certification_catalog() -> &'static [Certification] {
    &catalog().certifications
}
