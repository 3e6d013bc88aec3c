//! Result records for the skills-gap analyzer.

use ridgeline_catalog::{Difficulty, SkillCategory};
use serde::{Deserialize, Serialize};

/// Urgency of closing one skill gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GapPriority {
    Critical,
    High,
    Medium,
    Low,
}

impl GapPriority {
    /// Sort rank; lower sorts first.
    pub fn rank(&self) -> u8 {
        match self {
            Self::Critical => 0,
            Self::High => 1,
            Self::Medium => 2,
            Self::Low => 3,
        }
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

/// Coarse readiness bucket derived from the gap score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadinessLevel {
    Ready,
    Advanced,
    Intermediate,
    Beginner,
}

impl ReadinessLevel {
    /// Band a gap score: >= 80 ready, >= 60 advanced, >= 40 intermediate,
    /// otherwise beginner.
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            Self::Ready
        } else if score >= 60.0 {
            Self::Advanced
        } else if score >= 40.0 {
            Self::Intermediate
        } else {
            Self::Beginner
        }
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Ready => "ready",
            Self::Advanced => "advanced",
            Self::Intermediate => "intermediate",
            Self::Beginner => "beginner",
        }
    }
}

/// Deficit between one role target and the candidate's level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGap {
    /// Skill name as declared by the role.
    pub skill: String,
    /// Competency category.
    pub category: SkillCategory,
    /// Candidate's level (0 when the skill is absent).
    pub current_level: u8,
    /// Level the role targets.
    pub required_level: u8,
    /// Urgency of closing the gap.
    pub priority: GapPriority,
    /// Raw study estimate in months.
    pub estimated_months: f64,
    /// Human-readable study estimate ("2-4 months").
    pub estimated_time_to_learn: String,
    /// How hard the climb is expected to be.
    pub difficulty: Difficulty,
    /// Why this gap was reported.
    pub reasoning: String,
}

impl SkillGap {
    /// Levels between current and target.
    pub fn level_deficit(&self) -> u8 {
        self.required_level.saturating_sub(self.current_level)
    }
}

/// Aggregate result of one analysis run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GapAnalysis {
    /// Title of the role the candidate was compared against.
    pub role_title: String,
    /// Deficits, sorted by priority (critical first).
    pub gaps: Vec<SkillGap>,
    /// Share of target proficiency already met, 0-100.
    pub gap_score: f64,
    /// Readiness bucket for `gap_score`.
    pub readiness: ReadinessLevel,
    /// Templated one-paragraph summary.
    pub summary: String,
}

impl GapAnalysis {
    /// Number of critical gaps.
    pub fn critical_gap_count(&self) -> usize {
        self.gaps
            .iter()
            .filter(|gap| gap.priority == GapPriority::Critical)
            .count()
    }
}
