//! Core data model shared by every roadmap stage.

use serde::{Deserialize, Deserializer, Serialize};

/// Highest self-assessed proficiency level.
pub const MAX_PROFICIENCY: u8 = 5;

/// Broad competency category for a skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    /// Hands-on engineering skills (languages, frameworks, tooling).
    Technical,
    /// Interpersonal and communication skills.
    Soft,
    /// Industry or product domain knowledge.
    Domain,
    /// People and project leadership.
    Leadership,
}

impl SkillCategory {
    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Technical => "technical",
            Self::Soft => "soft",
            Self::Domain => "domain",
            Self::Leadership => "leadership",
        }
    }

    /// Estimated months of focused study to climb one proficiency level.
    pub fn months_per_level(&self) -> f64 {
        match self {
            Self::Technical => 3.0,
            Self::Soft => 2.0,
            Self::Domain => 2.5,
            Self::Leadership => 4.0,
        }
    }
}

/// Clamp a deserialized level into the 0..=5 proficiency scale.
fn proficiency_level<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = u8::deserialize(deserializer)?;
    Ok(raw.min(MAX_PROFICIENCY))
}

/// A named competency with a self-assessed proficiency level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    /// Skill name as the candidate entered it.
    pub name: String,
    /// Competency category.
    pub category: SkillCategory,
    /// Self-assessed level, 0 (none) to 5 (expert).
    #[serde(deserialize_with = "proficiency_level")]
    pub proficiency: u8,
}

impl Skill {
    /// Create a skill, clamping the level into range.
    pub fn new(name: impl Into<String>, category: SkillCategory, proficiency: u8) -> Self {
        Self {
            name: name.into(),
            category,
            proficiency: proficiency.min(MAX_PROFICIENCY),
        }
    }
}

/// A skill a role expects, with the proficiency the role targets.
///
/// The level is deserialized as-is; catalog validation rejects values above
/// [`MAX_PROFICIENCY`] rather than clamping them, so data errors are loud.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillTarget {
    /// Skill name.
    pub name: String,
    /// Competency category.
    pub category: SkillCategory,
    /// Target proficiency, 1..=5.
    pub level: u8,
}

/// Inclusive years-of-experience band for a role.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ExperienceRange {
    pub min_years: u8,
    pub max_years: u8,
}

/// Annual salary band in USD.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SalaryBand {
    pub min: u32,
    pub max: u32,
}

/// Static expectations for a job title.
///
/// Records are declared in `data/roles.toml`; declaration order is the lookup
/// precedence for substring matches, so more specific titles come first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleRequirements {
    /// Lowercase lookup key.
    pub key: String,
    /// Human-readable title.
    pub title: String,
    /// Typical experience band.
    pub experience: ExperienceRange,
    /// Typical salary band.
    pub salary: SalaryBand,
    /// Skills the role requires.
    #[serde(default, rename = "required")]
    pub required_skills: Vec<SkillTarget>,
    /// Skills the role prefers but does not require.
    #[serde(default, rename = "preferred")]
    pub preferred_skills: Vec<SkillTarget>,
}

impl RoleRequirements {
    /// Whether this record is the generic fallback (no key, no targets).
    pub fn is_fallback(&self) -> bool {
        self.key.is_empty()
    }
}

/// Difficulty scale shared by learning resources and skill gaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Moderate,
    Challenging,
}

impl Difficulty {
    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Moderate => "moderate",
            Self::Challenging => "challenging",
        }
    }
}

/// Kind of learning material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Course,
    Book,
    Practice,
    Certification,
}

impl ResourceKind {
    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Course => "course",
            Self::Book => "book",
            Self::Practice => "practice",
            Self::Certification => "certification",
        }
    }
}

/// How a resource is paid for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostType {
    Free,
    OneTime,
    /// Billed per month while in use.
    Subscription,
}

/// One course, book, or practice item from the resource catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LearningResource {
    pub kind: ResourceKind,
    pub title: String,
    pub provider: String,
    /// USD; per month for subscriptions, total otherwise.
    pub cost: u32,
    pub cost_type: CostType,
    pub difficulty: Difficulty,
}

/// Certification category used for role allow-list filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CertCategory {
    Technical,
    Cloud,
    Security,
    Data,
    Leadership,
    Agile,
}

/// How relevant a certification is to the roles that allow its category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relevance {
    Essential,
    Recommended,
    Optional,
}

impl Relevance {
    /// Sort rank; lower sorts first.
    pub fn rank(&self) -> u8 {
        match self {
            Self::Essential => 0,
            Self::Recommended => 1,
            Self::Optional => 2,
        }
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Essential => "essential",
            Self::Recommended => "recommended",
            Self::Optional => "optional",
        }
    }
}

/// A credential from the certification catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Certification {
    pub name: String,
    pub provider: String,
    pub category: CertCategory,
    pub relevance: Relevance,
    /// Exam cost in USD.
    pub cost: u32,
    pub difficulty: Difficulty,
    /// Lowercase skill keywords the certification covers.
    pub skills: Vec<String>,
    /// Suggested preparation material.
    #[serde(rename = "preparation")]
    pub preparation_resources: Vec<String>,
}

fn default_time_per_week() -> u32 {
    10
}

fn default_budget() -> u32 {
    500
}

/// Candidate input record: current state, target, and constraints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateProfile {
    /// Current job title.
    pub current_role: String,
    /// Free-text target job title. May be empty when the caller supplies
    /// the target out of band.
    #[serde(default)]
    pub target_role: String,
    /// Self-reported skills.
    #[serde(default)]
    pub skills: Vec<Skill>,
    /// Hours per week available for study.
    #[serde(default = "default_time_per_week")]
    pub time_per_week_hours: u32,
    /// Learning budget in USD.
    #[serde(default = "default_budget")]
    pub budget: u32,
    /// Names of certifications already held.
    #[serde(default)]
    pub certifications: Vec<String>,
    /// Total years of professional experience.
    #[serde(default)]
    pub experience_years: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skill_new_clamps_proficiency() {
        let skill = Skill::new("Rust", SkillCategory::Technical, 9);
        assert_eq!(skill.proficiency, MAX_PROFICIENCY);
    }

    #[test]
    fn skill_deserialization_clamps_proficiency() {
        let skill: Skill =
            serde_json::from_str(r#"{"name":"Rust","category":"technical","proficiency":7}"#)
                .expect("valid skill json");
        assert_eq!(skill.proficiency, MAX_PROFICIENCY);
    }

    #[test]
    fn categories_have_distinct_month_multipliers() {
        assert_eq!(SkillCategory::Technical.months_per_level(), 3.0);
        assert_eq!(SkillCategory::Soft.months_per_level(), 2.0);
        assert_eq!(SkillCategory::Domain.months_per_level(), 2.5);
        assert_eq!(SkillCategory::Leadership.months_per_level(), 4.0);
    }

    #[test]
    fn difficulty_orders_easy_to_challenging() {
        assert!(Difficulty::Easy < Difficulty::Moderate);
        assert!(Difficulty::Moderate < Difficulty::Challenging);
    }

    #[test]
    fn relevance_rank_orders_essential_first() {
        assert!(Relevance::Essential.rank() < Relevance::Recommended.rank());
        assert!(Relevance::Recommended.rank() < Relevance::Optional.rank());
    }

    #[test]
    fn profile_defaults_apply_when_fields_missing() {
        let profile: CandidateProfile = serde_json::from_str(
            r#"{"current_role":"Developer","target_role":"Senior Developer"}"#,
        )
        .expect("valid profile json");
        assert_eq!(profile.time_per_week_hours, 10);
        assert_eq!(profile.budget, 500);
        assert!(profile.skills.is_empty());
        assert!(profile.certifications.is_empty());
    }
}
